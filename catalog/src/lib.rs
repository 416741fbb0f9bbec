//! Bundled content for the Maison Itinérance site.
//!
//! This crate owns the typed records synced from the CMS at build time and the
//! pure accessors the page layer reads. Nothing here performs I/O: every
//! collection is a `'static` slice, and every derived view is rebuilt from
//! those slices on demand without touching them.

mod data;
mod media;
mod records;
mod views;

pub use media::{MediaAsset, MediaKind, PLACEHOLDER_SRC};
pub use records::{
    CampaignRecord, ClientJourneyRecord, Credit, ItineraryStop, JourneyRecord, JourneyStatus, ShowcaseEntry,
};
pub use views::{
    CarouselSlide, ClientJourneyView, build_carousel, build_client_overview, carousel, client_overview, spotlight,
};

/// Identity shared by every content record.
///
/// `id` is the CMS document identifier used for cross-collection references;
/// `slug` is the URL segment. Both are unique within their collection.
pub trait Record {
    fn id(&self) -> &str;
    fn slug(&self) -> &str;
}

/// Find the record whose slug matches exactly.
#[must_use]
pub fn find_by_slug<'a, T: Record>(items: &'a [T], slug: &str) -> Option<&'a T> {
    items.iter().find(|item| item.slug() == slug)
}

/// Find the record whose CMS identifier matches exactly.
#[must_use]
pub fn find_by_id<'a, T: Record>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

// =============================================================================
// ACCESSORS
// =============================================================================

/// Signature journeys offered on the public site.
#[must_use]
pub fn journeys() -> &'static [JourneyRecord] {
    data::JOURNEYS
}

/// Production campaigns shot for partner houses.
#[must_use]
pub fn campaigns() -> &'static [CampaignRecord] {
    data::CAMPAIGNS
}

#[must_use]
pub fn campaign_by_slug(slug: &str) -> Option<&'static CampaignRecord> {
    find_by_slug(campaigns(), slug)
}

/// Bespoke journeys shown in the client portal.
#[must_use]
pub fn client_journeys() -> &'static [ClientJourneyRecord] {
    data::CLIENT_JOURNEYS
}

#[must_use]
pub fn client_journey_by_slug(slug: &str) -> Option<&'static ClientJourneyRecord> {
    find_by_slug(client_journeys(), slug)
}

/// Editorial showcase feeding the home-page carousel.
#[must_use]
pub fn showcase() -> &'static [ShowcaseEntry] {
    data::SHOWCASE
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
