//! Derived content views.
//!
//! Each view joins source collections by identifier and returns a fresh `Vec`
//! of borrowed references. Sources are never reordered in place, so the same
//! input slices always produce the same output.

use serde::Serialize;

use crate::records::{ClientJourneyRecord, JourneyRecord, ShowcaseEntry};
use crate::{client_journeys, find_by_id, journeys, showcase};

/// One slide of the home-page carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CarouselSlide<'a> {
    /// Zero-based position after ordering and dropping dangling entries.
    pub position: usize,
    pub caption: &'a str,
    pub journey: &'a JourneyRecord,
}

/// Build carousel slides from showcase entries.
///
/// Entries are ordered by `order`, ties keep source order, and entries whose
/// `journey_id` has no matching journey are skipped.
#[must_use]
pub fn build_carousel<'a>(entries: &'a [ShowcaseEntry], journeys: &'a [JourneyRecord]) -> Vec<CarouselSlide<'a>> {
    let mut ordered: Vec<&ShowcaseEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.order);

    ordered
        .into_iter()
        .filter_map(|entry| find_by_id(journeys, entry.journey_id).map(|journey| (entry.caption, journey)))
        .enumerate()
        .map(|(position, (caption, journey))| CarouselSlide { position, caption, journey })
        .collect()
}

#[must_use]
pub fn carousel() -> Vec<CarouselSlide<'static>> {
    build_carousel(showcase(), journeys())
}

/// A client journey annotated with the signature journey it is based on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClientJourneyView<'a> {
    pub record: &'a ClientJourneyRecord,
    /// `None` when the referenced journey is not in the catalog.
    pub base: Option<&'a JourneyRecord>,
}

impl ClientJourneyView<'_> {
    #[must_use]
    pub fn destination(&self) -> &str {
        self.base.map_or("Destination to be announced", |journey| journey.destination)
    }
}

#[must_use]
pub fn build_client_overview<'a>(
    records: &'a [ClientJourneyRecord],
    journeys: &'a [JourneyRecord],
) -> Vec<ClientJourneyView<'a>> {
    records
        .iter()
        .map(|record| ClientJourneyView { record, base: find_by_id(journeys, record.journey_id) })
        .collect()
}

#[must_use]
pub fn client_overview() -> Vec<ClientJourneyView<'static>> {
    build_client_overview(client_journeys(), journeys())
}

/// Journey featured at the top of the client dashboard.
#[must_use]
pub fn spotlight() -> Option<&'static ClientJourneyRecord> {
    client_journeys().first()
}
