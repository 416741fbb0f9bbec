//! Content snapshot synced from the CMS.

use crate::media::MediaAsset;
use crate::records::{
    CampaignRecord, ClientJourneyRecord, Credit, ItineraryStop, JourneyRecord, JourneyStatus, ShowcaseEntry,
};

// =============================================================================
// JOURNEYS
// =============================================================================

pub(crate) static JOURNEYS: &[JourneyRecord] = &[
    JourneyRecord {
        id: "jrn-kyoto",
        slug: "kyoto-indigo-season",
        title: "Kyoto Indigo Season",
        destination: "Kyoto, Japan",
        season: "Autumn",
        duration_days: 9,
        summary: "Dye houses, kaiseki counters and temple gardens at the turn of the maples.",
        hero: MediaAsset::image("/media/journeys/kyoto-hero.jpg", "Indigo cloth drying above a Kyoto lane")
            .credited("Studio Amane"),
        gallery: &[
            MediaAsset::image("/media/journeys/kyoto-dye-vats.jpg", "Fermenting indigo vats"),
            MediaAsset::image("/media/journeys/kyoto-garden.jpg", "Moss garden in the rain"),
        ],
    },
    JourneyRecord {
        id: "jrn-atlas",
        slug: "atlas-salt-road",
        title: "Atlas Salt Road",
        destination: "High Atlas, Morocco",
        season: "Spring",
        duration_days: 11,
        summary: "Caravan routes between Berber weavers and the salt pans south of the passes.",
        hero: MediaAsset::image("/media/journeys/atlas-hero.jpg", "Mule train crossing a High Atlas ridge")
            .credited("Leila Haddou"),
        gallery: &[MediaAsset::image("/media/journeys/atlas-loom.jpg", "Weaver at a vertical loom")],
    },
    JourneyRecord {
        id: "jrn-lofoten",
        slug: "lofoten-light",
        title: "Lofoten Light",
        destination: "Lofoten, Norway",
        season: "Winter",
        duration_days: 7,
        summary: "Blue-hour shoots on the fjords and nights under the aurora in restored rorbuer.",
        hero: MediaAsset::image("/media/journeys/lofoten-hero.jpg", "Red cabins on a frozen shoreline"),
        gallery: &[],
    },
    JourneyRecord {
        id: "jrn-oaxaca",
        slug: "oaxaca-loom-route",
        title: "Oaxaca Loom Route",
        destination: "Oaxaca, Mexico",
        season: "Late autumn",
        duration_days: 10,
        summary: "Backstrap looms, cochineal dye farms and mezcal palenques in the valleys.",
        hero: MediaAsset::image("/media/journeys/oaxaca-hero.jpg", "Cochineal-red wool hung to dry"),
        gallery: &[
            MediaAsset::image("/media/journeys/oaxaca-market.jpg", "Tlacolula Sunday market"),
            MediaAsset::image("", "Palenque at dusk"),
        ],
    },
];

// =============================================================================
// CAMPAIGNS
// =============================================================================

pub(crate) static CAMPAIGNS: &[CampaignRecord] = &[
    CampaignRecord {
        id: "cmp-linen",
        slug: "linen-after-rain",
        title: "Linen After Rain",
        house: "Casa Ventura",
        year: 2024,
        location: "Puglia, Italy",
        synopsis: "A summer linen collection photographed across masserie after a July storm.",
        credits: &[
            Credit { role: "Photography", name: "Marco Ilari" },
            Credit { role: "Styling", name: "Ines Ferro" },
        ],
        media: &[
            MediaAsset::image("/media/campaigns/linen-courtyard.jpg", "Model in a whitewashed courtyard")
                .credited("Marco Ilari"),
            MediaAsset::image("/media/campaigns/linen-olive.jpg", "Linen shirt among olive trees"),
        ],
    },
    CampaignRecord {
        id: "cmp-desert",
        slug: "desert-tailoring",
        title: "Desert Tailoring",
        house: "Maison Aurele",
        year: 2023,
        location: "Merzouga, Morocco",
        synopsis: "Structured wool tailoring set against the Erg Chebbi dunes at first light.",
        credits: &[Credit { role: "Photography", name: "Leila Haddou" }],
        media: &[
            MediaAsset::image("/media/campaigns/desert-dune.jpg", "Tailored coat on a dune crest"),
            MediaAsset::video("/media/campaigns/desert-film.mp4", "Campaign film: dawn walk across the dunes")
                .credited("Leila Haddou"),
            MediaAsset::image("", "Behind the scenes at camp"),
        ],
    },
    CampaignRecord {
        id: "cmp-knit",
        slug: "north-sea-knit",
        title: "North Sea Knit",
        house: "Halden & Co",
        year: 2025,
        location: "Shetland, Scotland",
        synopsis: "Heritage knitwear worn by the islanders who make it, shot over one week of gales.",
        credits: &[
            Credit { role: "Photography", name: "Ruth Tait" },
            Credit { role: "Casting", name: "Local" },
        ],
        media: &[MediaAsset::image("/media/campaigns/knit-harbour.jpg", "Fisherman in a Fair Isle jumper")],
    },
];

// =============================================================================
// CLIENT JOURNEYS
// =============================================================================

pub(crate) static CLIENT_JOURNEYS: &[ClientJourneyRecord] = &[
    ClientJourneyRecord {
        id: "cj-001",
        slug: "kyoto-private-ateliers",
        journey_id: "jrn-kyoto",
        title: "Private Ateliers of Kyoto",
        travel_window: "3-11 November",
        status: JourneyStatus::Confirmed,
        concierge: "Aiko Mori",
        itinerary: &[
            ItineraryStop { day: 1, place: "Gion", note: "Arrival and evening tea ceremony" },
            ItineraryStop { day: 2, place: "Nishijin", note: "Private visit to a brocade workshop" },
            ItineraryStop { day: 4, place: "Kameoka", note: "Indigo dyeing with a fifth-generation master" },
        ],
        moodboard: &[MediaAsset::image("/media/client/kyoto-mood.jpg", "Indigo swatches")],
    },
    ClientJourneyRecord {
        id: "cj-002",
        slug: "atlas-caravan-for-two",
        journey_id: "jrn-atlas",
        title: "Atlas Caravan for Two",
        travel_window: "April, dates to confirm",
        status: JourneyStatus::Proposed,
        concierge: "Youssef Amrani",
        itinerary: &[
            ItineraryStop { day: 1, place: "Marrakech", note: "Riad check-in" },
            ItineraryStop { day: 3, place: "Tizi n'Tichka", note: "Crossing with the caravan" },
        ],
        moodboard: &[],
    },
    ClientJourneyRecord {
        id: "cj-003",
        slug: "lofoten-aurora-retreat",
        journey_id: "jrn-lofoten",
        title: "Lofoten Aurora Retreat",
        travel_window: "14-21 February",
        status: JourneyStatus::Completed,
        concierge: "Sigrid Holm",
        itinerary: &[ItineraryStop { day: 1, place: "Reine", note: "Rorbu suite and arctic dinner" }],
        moodboard: &[MediaAsset::image("", "Aurora over Reine")],
    },
];

// =============================================================================
// SHOWCASE
// =============================================================================

pub(crate) static SHOWCASE: &[ShowcaseEntry] = &[
    ShowcaseEntry { journey_id: "jrn-atlas", caption: "Salt roads at first light", order: 2 },
    ShowcaseEntry { journey_id: "jrn-kyoto", caption: "The indigo hour", order: 1 },
    ShowcaseEntry { journey_id: "jrn-oaxaca", caption: "Threads of cochineal", order: 3 },
    ShowcaseEntry { journey_id: "jrn-lofoten", caption: "Blue hour on the fjord", order: 3 },
];
