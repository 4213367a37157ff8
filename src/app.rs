use dioxus::prelude::*;
use wellspring_core::{read_summary, CommunitySummary};

use crate::context::get_config;
use crate::pages::{Community, Dashboard};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Dashboard with the community snapshot card
/// - `/community` - Community hub with the full breakdown
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/community")]
    Community {},
}

/// Root application component.
///
/// Provides global styles, the summary context, and routing.
#[component]
pub fn App() -> Element {
    let mut summary: Signal<Option<CommunitySummary>> = use_signal(|| None);

    use_context_provider(|| summary);

    // Load the summary on mount, then keep refreshing if configured
    use_effect(move || {
        spawn(async move {
            let config = get_config();
            loop {
                match read_summary(&config.summary_path).await {
                    Ok(Some(latest)) => {
                        let changed = *summary.peek() != Some(latest.clone());
                        if changed {
                            tracing::info!("Community summary updated: {:?}", latest);
                            summary.set(Some(latest));
                        }
                    }
                    Ok(None) => {
                        tracing::debug!("Community summary not available yet");
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read community summary: {}", e);
                    }
                }

                let Some(period) = config.refresh else { break };
                tokio::time::sleep(period).await;
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
