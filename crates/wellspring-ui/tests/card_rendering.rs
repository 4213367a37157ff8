//! Rendering tests for the community snapshot card
//!
//! The card is mounted in a headless VirtualDom. Markup is checked through
//! server-side rendering, and the call-to-action is pressed by dispatching a
//! real click to the element that registered the listener.

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::{ElementId, Mutation, Mutations, VirtualDom};
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use serde_json::json;
use wellspring_core::CommunitySummary;
use wellspring_ui::{CommunitySnapshotCard, CTA_LABEL, LOADING_MESSAGE, SNAPSHOT_TITLE};

// ============================================================================
// Harness
// ============================================================================

#[derive(Clone, Props)]
struct HarnessProps {
    summary: Option<CommunitySummary>,
    presses: Rc<Cell<u32>>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, other: &Self) -> bool {
        self.summary == other.summary && Rc::ptr_eq(&self.presses, &other.presses)
    }
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    let presses = props.presses.clone();
    let on_navigate = EventHandler::new(move |_: ()| presses.set(presses.get() + 1));

    rsx! {
        CommunitySnapshotCard {
            summary: props.summary.clone(),
            on_navigate: on_navigate,
        }
    }
}

fn mount(summary: Option<CommunitySummary>) -> (VirtualDom, Rc<Cell<u32>>) {
    let presses = Rc::new(Cell::new(0));
    let dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            summary,
            presses: presses.clone(),
        },
    );
    (dom, presses)
}

/// Render to HTML with entity-escaped quotes turned back into quotes
fn render(summary: Option<CommunitySummary>) -> String {
    let (mut dom, _) = mount(summary);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
        .replace("&quot;", "\"")
        .replace("&#34;", "\"")
}

fn detail_lines(markup: &str) -> usize {
    markup.matches("<li").count()
}

/// Mount the card, click its call-to-action once, return how often the
/// navigation handler ran
fn click_cta(summary: Option<CommunitySummary>) -> u32 {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

    let (mut dom, presses) = mount(summary);
    let mut mutations = Mutations::default();
    dom.rebuild(&mut mutations);

    let targets: Vec<ElementId> = mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name.trim_start_matches("on") == "click" => {
                Some(*id)
            }
            _ => None,
        })
        .collect();
    assert_eq!(targets.len(), 1, "card should have exactly one click target");
    assert_eq!(presses.get(), 0, "rendering must not navigate");

    let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
    let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
    dom.runtime().handle_event("click", event, targets[0]);

    presses.get()
}

fn parse(value: serde_json::Value) -> CommunitySummary {
    serde_json::from_value(value).unwrap()
}

// ============================================================================
// Markup
// ============================================================================

#[test]
fn test_no_summary_shows_loading() {
    let markup = render(None);
    assert!(markup.contains(SNAPSHOT_TITLE));
    assert!(markup.contains(LOADING_MESSAGE));
    assert_eq!(detail_lines(&markup), 0);
    assert!(markup.contains(CTA_LABEL));
}

#[test]
fn test_empty_summary_shows_loading() {
    let markup = render(Some(parse(json!({}))));
    assert!(markup.contains(LOADING_MESSAGE));
    assert_eq!(detail_lines(&markup), 0);
}

#[test]
fn test_success_stories_only() {
    let markup = render(Some(parse(json!({ "newSuccessStories": 5 }))));
    assert!(!markup.contains(LOADING_MESSAGE));
    assert_eq!(detail_lines(&markup), 1);
    assert!(markup.contains("5 new success stories"));
    assert!(!markup.contains("Popular tip"));
    assert!(!markup.contains("active discussion"));
}

#[test]
fn test_popular_tip_is_quoted() {
    let markup = render(Some(parse(json!({ "popularTip": "Drink water" }))));
    assert_eq!(detail_lines(&markup), 1);
    assert!(markup.contains("\"Drink water\""));
}

#[test]
fn test_stories_then_discussions() {
    let markup = render(Some(parse(
        json!({ "activeDiscussions": 7, "newSuccessStories": 3 }),
    )));
    assert_eq!(detail_lines(&markup), 2);
    assert!(!markup.contains("Popular tip"));

    let stories = markup.find("3 new success stories").unwrap();
    let discussions = markup.find("7 active discussions").unwrap();
    assert!(stories < discussions);
}

#[test]
fn test_own_keys_without_values_show_empty_list() {
    for value in [json!({ "newSuccessStories": null }), json!({ "mood": "sunny" })] {
        let markup = render(Some(parse(value)));
        assert!(!markup.contains(LOADING_MESSAGE));
        assert_eq!(detail_lines(&markup), 0);
        assert!(markup.contains(CTA_LABEL));
    }
}

// ============================================================================
// Call-to-action
// ============================================================================

#[test]
fn test_click_navigates_once_while_loading() {
    assert_eq!(click_cta(None), 1);
}

#[test]
fn test_click_navigates_once_with_empty_summary() {
    assert_eq!(click_cta(Some(CommunitySummary::new())), 1);
}

#[test]
fn test_click_navigates_once_with_details() {
    let summary = CommunitySummary::new()
        .with_success_stories(5)
        .with_tip("Drink water")
        .with_discussions(7);
    assert_eq!(click_cta(Some(summary)), 1);
}
