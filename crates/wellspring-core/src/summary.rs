//! Community Summary - Activity metrics shown on the dashboard
//!
//! The summary is a transient value handed to the snapshot card on every
//! render. It remembers whether the source object had any keys at all, so
//! `{"mood": "sunny"}` or `{"newSuccessStories": null}` are not mistaken for
//! `{}`: only a summary with no keys is empty. Whether a field produces a
//! visible line is a separate question answered by the accessors
//! ([`CommunitySummary::success_stories`], [`CommunitySummary::tip`],
//! [`CommunitySummary::discussions`]), which hide falsy values.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A count as the data source delivered it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Count {
    /// Whole, non-negative number
    Number(u64),
    /// Any other value worth printing verbatim ("lots", "2.5", "-3")
    Text(String),
}

impl Count {
    /// Whether the count is truthy and should produce a line
    pub fn is_shown(&self) -> bool {
        match self {
            Count::Number(n) => *n > 0,
            Count::Text(t) => !t.is_empty(),
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Number(n) => write!(f, "{n}"),
            Count::Text(t) => f.write_str(t),
        }
    }
}

impl From<u64> for Count {
    fn from(n: u64) -> Self {
        Count::Number(n)
    }
}

impl From<&str> for Count {
    fn from(s: &str) -> Self {
        Count::Text(s.to_string())
    }
}

/// Community activity metrics, as delivered by the dashboard's data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunitySummary {
    /// Success stories shared since the last visit
    #[serde(skip_serializing_if = "Option::is_none")]
    new_success_stories: Option<Count>,

    /// The most popular tip right now (e.g. "Drink water")
    #[serde(skip_serializing_if = "Option::is_none")]
    popular_tip: Option<String>,

    /// Discussions with recent activity
    #[serde(skip_serializing_if = "Option::is_none")]
    active_discussions: Option<Count>,

    /// Keys of the source object that did not become a field
    /// (unknown names, or values with nothing to render)
    #[serde(skip)]
    unread_keys: usize,
}

impl<'de> Deserialize<'de> for CommunitySummary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_fields(&fields))
    }
}

impl CommunitySummary {
    /// An empty summary, equivalent to `{}`
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a summary from the keys of a JSON object.
    ///
    /// Never fails: values that cannot be read still count as present keys.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let mut summary = Self::default();
        for (key, value) in fields {
            let read = match key.as_str() {
                "newSuccessStories" => {
                    summary.new_success_stories = count_from_value(value);
                    summary.new_success_stories.is_some()
                }
                "popularTip" => {
                    summary.popular_tip = text_from_value(value);
                    summary.popular_tip.is_some()
                }
                "activeDiscussions" => {
                    summary.active_discussions = count_from_value(value);
                    summary.active_discussions.is_some()
                }
                _ => false,
            };
            if !read {
                summary.unread_keys += 1;
            }
        }
        summary
    }

    pub fn with_success_stories(mut self, count: impl Into<Count>) -> Self {
        self.new_success_stories = Some(count.into());
        self
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.popular_tip = Some(tip.into());
        self
    }

    pub fn with_discussions(mut self, count: impl Into<Count>) -> Self {
        self.active_discussions = Some(count.into());
        self
    }

    /// True when the source object had no keys at all.
    ///
    /// An empty summary is rendered exactly like a missing one.
    pub fn is_empty(&self) -> bool {
        self.new_success_stories.is_none()
            && self.popular_tip.is_none()
            && self.active_discussions.is_none()
            && self.unread_keys == 0
    }

    /// Success stories count, if it should be displayed
    pub fn success_stories(&self) -> Option<&Count> {
        self.new_success_stories.as_ref().filter(|c| c.is_shown())
    }

    /// Popular tip, if it should be displayed
    pub fn tip(&self) -> Option<&str> {
        self.popular_tip.as_deref().filter(|t| !t.is_empty())
    }

    /// Active discussions count, if it should be displayed
    pub fn discussions(&self) -> Option<&Count> {
        self.active_discussions.as_ref().filter(|c| c.is_shown())
    }
}

/// Read a count from whatever JSON the source produced.
///
/// Non-negative whole numbers and numeric strings become [`Count::Number`]; other
/// numbers and strings are kept verbatim as [`Count::Text`]. Null, booleans,
/// arrays and objects have nothing to render.
pub(crate) fn count_from_value(value: &Value) -> Option<Count> {
    match value {
        Value::Number(n) => Some(match (n.as_u64(), n.as_f64()) {
            (Some(whole), _) => Count::Number(whole),
            (None, Some(f)) if f == 0.0 => Count::Number(0),
            (None, Some(f)) if f > 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => {
                Count::Number(f as u64)
            }
            _ => Count::Text(n.to_string()),
        }),
        Value::String(s) => Some(match s.trim().parse::<u64>() {
            Ok(whole) => Count::Number(whole),
            Err(_) => Count::Text(s.clone()),
        }),
        _ => None,
    }
}

/// Read a tip from whatever JSON the source produced.
pub(crate) fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => Some(String::new()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
