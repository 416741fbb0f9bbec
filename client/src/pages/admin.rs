//! Admin dashboard at `/admin`: content health for the synced catalog.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use catalog::MediaAsset;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::session_gate::SessionGate;

/// A media slot whose CMS entry has no uploaded file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MissingMedia {
    pub collection: &'static str,
    pub record: &'static str,
    pub alt: &'static str,
}

fn missing_in(
    collection: &'static str,
    record: &'static str,
    assets: impl IntoIterator<Item = &'static MediaAsset>,
) -> impl Iterator<Item = MissingMedia> {
    assets
        .into_iter()
        .filter(|asset| asset.is_missing())
        .map(move |asset| MissingMedia { collection, record, alt: asset.alt })
}

/// Every media slot across the catalog that will render as a placeholder.
pub(crate) fn missing_media_report() -> Vec<MissingMedia> {
    let journeys = catalog::journeys().iter().flat_map(|j| {
        missing_in("journeys", j.title, std::iter::once(&j.hero).chain(j.gallery.iter()))
    });
    let campaigns = catalog::campaigns().iter().flat_map(|c| missing_in("campaigns", c.title, c.media.iter()));
    let client = catalog::client_journeys()
        .iter()
        .flat_map(|r| missing_in("client journeys", r.title, r.moodboard.iter()));
    journeys.chain(campaigns).chain(client).collect()
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Title text="Admin · Maison Itinérance"/>
        <SessionGate>
            <AdminDashboard/>
        </SessionGate>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let counts = [
        ("Journeys", catalog::journeys().len()),
        ("Campaigns", catalog::campaigns().len()),
        ("Client journeys", catalog::client_journeys().len()),
        ("Showcase slides", catalog::carousel().len()),
    ];
    let missing = missing_media_report();
    let missing_count = missing.len();

    view! {
        <section class="admin">
            <h1>"Content"</h1>
            <dl class="admin__counts">
                {counts
                    .into_iter()
                    .map(|(label, count)| {
                        view! {
                            <dt>{label}</dt>
                            <dd>{count}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
            <h2>{format!("Missing media ({missing_count})")}</h2>
            <table class="admin__missing">
                <thead>
                    <tr>
                        <th>"Collection"</th>
                        <th>"Record"</th>
                        <th>"Asset"</th>
                    </tr>
                </thead>
                <tbody>
                    {missing
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{row.collection}</td>
                                    <td>{row.record}</td>
                                    <td>{row.alt}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
