use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// An analytics event: a name plus flat key/value attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub attributes: BTreeMap<String, Value>,
}

impl AnalyticsEvent {
    /// Create an event with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// One burst of the completion celebration.
///
/// Optional tuning values fall back to the renderer's defaults when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub spread: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_velocity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalar: Option<f32>,
    /// Vertical launch point, 0.0 (top) to 1.0 (bottom).
    pub origin_y: f32,
    pub shape: &'static str,
    pub colors: &'static [&'static str],
}
