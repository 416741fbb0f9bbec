//! Content record types.
//!
//! DESIGN
//! ======
//! Records borrow `'static` strings so the whole catalog lives in read-only
//! memory. Cross-collection references (`journey_id`) point at
//! [`JourneyRecord::id`] and are resolved by the views in `views.rs`.

use serde::Serialize;

use crate::Record;
use crate::media::MediaAsset;

/// A signature journey as published on the public site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct JourneyRecord {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub destination: &'static str,
    pub season: &'static str,
    pub duration_days: u16,
    pub summary: &'static str,
    pub hero: MediaAsset,
    pub gallery: &'static [MediaAsset],
}

/// Person credited on a campaign production.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Credit {
    pub role: &'static str,
    pub name: &'static str,
}

/// A fashion campaign produced on location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CampaignRecord {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    /// Fashion house the campaign was produced for.
    pub house: &'static str,
    pub year: u16,
    pub location: &'static str,
    pub synopsis: &'static str,
    pub credits: &'static [Credit],
    pub media: &'static [MediaAsset],
}

/// Booking progress of a client journey.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStatus {
    Proposed,
    Confirmed,
    InProgress,
    Completed,
}

impl JourneyStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Proposed => "Proposed",
            Self::Confirmed => "Confirmed",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

/// One day of a client itinerary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ItineraryStop {
    pub day: u16,
    pub place: &'static str,
    pub note: &'static str,
}

/// A bespoke journey prepared for portal clients, based on a signature journey.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClientJourneyRecord {
    pub id: &'static str,
    pub slug: &'static str,
    /// Identifier of the [`JourneyRecord`] this journey is built on.
    pub journey_id: &'static str,
    pub title: &'static str,
    pub travel_window: &'static str,
    pub status: JourneyStatus,
    pub concierge: &'static str,
    pub itinerary: &'static [ItineraryStop],
    pub moodboard: &'static [MediaAsset],
}

/// Editorial pick for the home-page carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShowcaseEntry {
    pub journey_id: &'static str,
    pub caption: &'static str,
    /// Display position; ties keep source order.
    pub order: u16,
}

impl Record for JourneyRecord {
    fn id(&self) -> &str {
        self.id
    }

    fn slug(&self) -> &str {
        self.slug
    }
}

impl Record for CampaignRecord {
    fn id(&self) -> &str {
        self.id
    }

    fn slug(&self) -> &str {
        self.slug
    }
}

impl Record for ClientJourneyRecord {
    fn id(&self) -> &str {
        self.id
    }

    fn slug(&self) -> &str {
        self.slug
    }
}
