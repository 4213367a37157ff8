//! Community hub page.
//!
//! Full breakdown of the summary the dashboard card condenses. Missing
//! values are shown as a dash here rather than hidden.

use dioxus::prelude::*;
use wellspring_core::Count;
use wellspring_ui::{Button, ButtonVariant, LOADING_MESSAGE};

use crate::app::Route;
use crate::context::{get_config, use_summary};

fn count_or_dash(count: Option<&Count>) -> String {
    count.map_or_else(|| "\u{2014}".to_string(), |n| n.to_string())
}

#[component]
pub fn Community() -> Element {
    let navigator = use_navigator();
    let summary = use_summary();
    let source = get_config().summary_path.display().to_string();

    let current = summary();
    let loaded = current.as_ref().filter(|s| !s.is_empty());

    rsx! {
        main { class: "community-page",
            header { class: "dashboard-header",
                h1 { class: "page-title", "Community Hub" }
                p { class: "tagline", "what everyone has been up to" }
            }

            if let Some(s) = loaded {
                section { class: "community-stats",
                    div { class: "stats-grid",
                        div { class: "stat-box",
                            div { class: "stat-value", "{count_or_dash(s.success_stories())}" }
                            div { class: "stat-label", "Success Stories" }
                        }
                        div { class: "stat-box",
                            div { class: "stat-value", "{count_or_dash(s.discussions())}" }
                            div { class: "stat-label", "Active Discussions" }
                        }
                    }
                    if let Some(tip) = s.tip() {
                        blockquote { class: "popular-tip", "“{tip}”" }
                    }
                }
            } else {
                p { class: "snapshot-loading", "{LOADING_MESSAGE}" }
            }

            p { class: "summary-source", "source: {source}" }

            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| {
                    navigator.push(Route::Dashboard {});
                },
                "← Back to dashboard"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_or_dash_formats() {
        assert_eq!(count_or_dash(Some(&Count::Number(12))), "12");
        assert_eq!(count_or_dash(Some(&Count::from("lots"))), "lots");
        assert_eq!(count_or_dash(None), "\u{2014}");
    }
}
