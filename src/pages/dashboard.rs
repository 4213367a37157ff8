//! Dashboard page - the landing view.
//!
//! Hosts the community snapshot card and owns what its call-to-action does.

use dioxus::prelude::*;
use wellspring_ui::CommunitySnapshotCard;

use crate::app::Route;
use crate::context::use_summary;

#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();
    let summary = use_summary();

    let visit_community = move |_: ()| {
        tracing::info!("Navigating to community hub");
        navigator.push(Route::Community {});
    };

    rsx! {
        main { class: "dashboard",
            header { class: "dashboard-header",
                h1 { class: "page-title", "Wellspring" }
                p { class: "tagline", "your community at a glance" }
            }

            div { class: "dashboard-grid",
                CommunitySnapshotCard {
                    summary: summary(),
                    on_navigate: visit_community,
                }
            }
        }
    }
}
