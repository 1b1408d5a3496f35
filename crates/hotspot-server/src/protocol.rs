//! JSON payloads served by the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The `id` query value. A key given more than once becomes a list, which
/// serializes as a JSON array and renders comma-joined in the templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SphereId {
    One(String),
    Many(Vec<String>),
}

impl SphereId {
    /// Collapse the query values for `id`. No values means no id.
    pub fn from_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(SphereId::One),
            _ => Some(SphereId::Many(values)),
        }
    }
}

impl fmt::Display for SphereId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SphereId::One(id) => f.write_str(id),
            SphereId::Many(ids) => f.write_str(&ids.join(",")),
        }
    }
}

/// Description of one sphere. The `id` key is omitted entirely when the
/// request carried no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SphereId>,
    pub name: String,
    pub description: String,
}

impl SphereData {
    /// Fill the templates with `id` verbatim. No validation happens here.
    pub fn for_id(id: Option<SphereId>) -> Self {
        let shown = id.as_ref().map(ToString::to_string).unwrap_or_default();
        Self {
            id,
            name: format!("Sphere {shown}"),
            description: format!("This is the description for sphere {shown}."),
        }
    }
}
