use serde::{Deserialize, Deserializer, Serialize};

const MAPS_SEARCH_PREFIX: &str = "https://maps.google.com/?q=";

/// One on-duty pharmacy as returned by the lookup endpoint.
///
/// Only `name` is guaranteed. Optional fields that arrive as empty strings
/// are stored as `None`, so "present" always means "non-empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacyRecord {
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub dist: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    /// Coordinate pair as text, e.g. `"39.9208,32.8541"`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub loc: Option<String>,
}

impl PharmacyRecord {
    /// `tel:` link for the phone number, if there is one.
    #[must_use]
    pub fn call_link(&self) -> Option<String> {
        self.phone.as_deref().map(|phone| format!("tel:{phone}"))
    }

    /// Map search link with the location text appended verbatim.
    #[must_use]
    pub fn directions_link(&self) -> Option<String> {
        self.loc
            .as_deref()
            .map(|loc| format!("{MAPS_SEARCH_PREFIX}{loc}"))
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
