use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::observation::{Frequency, InflationSource, ValueKind};

/// An indicator a provider can serve, with the interpretation of its values.
///
/// Catalog entries are `'static`; user-entered custom indicators are owned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDefinition {
    pub id: Cow<'static, str>,
    pub label: Cow<'static, str>,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub source: InflationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Cow<'static, str>>,
}

impl MetricDefinition {
    /// A custom indicator typed in by the user.
    pub fn custom(id: &str, kind: ValueKind, source: InflationSource) -> Self {
        let id = id.trim().to_string();
        Self {
            label: Cow::Owned(id.clone()),
            id: Cow::Owned(id),
            kind,
            source,
            frequency: None,
            notes: None,
        }
    }
}
