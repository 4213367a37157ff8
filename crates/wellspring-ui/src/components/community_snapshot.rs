//! Community Snapshot Card
//!
//! Dashboard card summarising community activity:
//! - new success stories since the last visit
//! - the currently popular tip, quoted
//! - the number of active discussions
//!
//! Fields that are missing or falsy produce no line at all. With no summary
//! (or an empty one) the card shows a loading message instead of the list.
//! The call-to-action is always rendered.

use dioxus::prelude::*;
use wellspring_core::{Count, CommunitySummary};

use super::{Button, ButtonVariant};

/// Card heading
pub const SNAPSHOT_TITLE: &str = "Community Snapshot";
/// Glyph shown next to the heading
pub const SNAPSHOT_ICON: &str = "\u{1F465}";
/// Shown in place of the detail list until a non-empty summary arrives
pub const LOADING_MESSAGE: &str = "Loading community data...";
/// Label of the call-to-action button
pub const CTA_LABEL: &str = "Visit Community Hub";

/// One detail line of the card, in display order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotLine {
    SuccessStories(Count),
    PopularTip(String),
    ActiveDiscussions(Count),
}

impl SnapshotLine {
    /// Stable identifier, used as the list key and CSS modifier
    pub fn kind(&self) -> &'static str {
        match self {
            SnapshotLine::SuccessStories(_) => "success-stories",
            SnapshotLine::PopularTip(_) => "popular-tip",
            SnapshotLine::ActiveDiscussions(_) => "active-discussions",
        }
    }

    /// Glyph shown before the line text
    pub fn icon(&self) -> &'static str {
        match self {
            SnapshotLine::SuccessStories(_) => "\u{1F389}",
            SnapshotLine::PopularTip(_) => "\u{1F4A1}",
            SnapshotLine::ActiveDiscussions(_) => "\u{1F4AC}",
        }
    }

    /// Human-readable text for the line
    pub fn text(&self) -> String {
        match self {
            SnapshotLine::SuccessStories(Count::Number(1)) => "1 new success story".to_string(),
            SnapshotLine::SuccessStories(n) => format!("{n} new success stories"),
            SnapshotLine::PopularTip(tip) => format!("Popular tip: \"{tip}\""),
            SnapshotLine::ActiveDiscussions(Count::Number(1)) => "1 active discussion".to_string(),
            SnapshotLine::ActiveDiscussions(n) => format!("{n} active discussions"),
        }
    }
}

/// What the card body shows for a given summary
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotView {
    /// No data yet: centered loading message
    Loading,
    /// Detail lines for the fields worth showing (possibly none)
    Details(Vec<SnapshotLine>),
}

impl SnapshotView {
    /// Decide what the card shows; a missing or empty summary means loading
    pub fn from_summary(summary: Option<&CommunitySummary>) -> Self {
        let Some(summary) = summary.filter(|s| !s.is_empty()) else {
            return SnapshotView::Loading;
        };

        let mut lines = Vec::with_capacity(3);
        if let Some(n) = summary.success_stories() {
            lines.push(SnapshotLine::SuccessStories(n.clone()));
        }
        if let Some(tip) = summary.tip() {
            lines.push(SnapshotLine::PopularTip(tip.to_string()));
        }
        if let Some(n) = summary.discussions() {
            lines.push(SnapshotLine::ActiveDiscussions(n.clone()));
        }
        SnapshotView::Details(lines)
    }

    /// True while the loading message replaces the detail list
    pub fn is_loading(&self) -> bool {
        matches!(self, SnapshotView::Loading)
    }

    /// Detail lines; empty while loading
    pub fn lines(&self) -> &[SnapshotLine] {
        match self {
            SnapshotView::Loading => &[],
            SnapshotView::Details(lines) => lines,
        }
    }
}

/// Forward a call-to-action press to the caller's navigation handler.
pub fn open_community(on_navigate: &EventHandler<()>) {
    tracing::debug!("Community hub requested from snapshot card");
    on_navigate.call(());
}

/// Properties for the CommunitySnapshotCard component
#[derive(Clone, PartialEq, Props)]
pub struct CommunitySnapshotCardProps {
    /// Latest summary, `None` while the dashboard is still loading it
    #[props(default)]
    pub summary: Option<CommunitySummary>,
    /// Called with no payload when the call-to-action is pressed
    pub on_navigate: EventHandler<()>,
}

/// Community snapshot card for the dashboard
///
/// # Example
///
/// ```rust,ignore
/// let summary = use_summary();
/// let navigator = use_navigator();
///
/// rsx! {
///     CommunitySnapshotCard {
///         summary: summary(),
///         on_navigate: move |_| { navigator.push(Route::Community {}); },
///     }
/// }
/// ```
#[component]
pub fn CommunitySnapshotCard(props: CommunitySnapshotCardProps) -> Element {
    let view = SnapshotView::from_summary(props.summary.as_ref());
    let on_navigate = props.on_navigate;

    rsx! {
        section { class: "community-snapshot",
            header { class: "snapshot-header",
                span {
                    class: "snapshot-icon",
                    role: "img",
                    "aria-label": "Community",
                    "{SNAPSHOT_ICON}"
                }
                h2 { class: "section-title", "{SNAPSHOT_TITLE}" }
            }

            if view.is_loading() {
                p { class: "snapshot-loading", "{LOADING_MESSAGE}" }
            } else {
                ul { class: "snapshot-details",
                    for line in view.lines().iter() {
                        {
                            let kind = line.kind();
                            let icon = line.icon();
                            let text = line.text();
                            rsx! {
                                li { key: "{kind}", class: "snapshot-line {kind}",
                                    span { class: "line-icon", "{icon}" }
                                    span { class: "line-text", "{text}" }
                                }
                            }
                        }
                    }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "snapshot-cta".to_string(),
                onclick: move |_| open_community(&on_navigate),
                "{CTA_LABEL}"
            }
        }
    }
}
