//! Request envelope, parameters and the requesting actor.

use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Opaque identifier of the requesting principal.
///
/// Never inspected by the router; forwarded to the permission gate and the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Children of a bulk upload, keyed by name. `None` creates a folder.
pub type BulkResources = BTreeMap<String, Option<String>>;

/// The `type` parameter of `create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Folder,
}

impl ResourceKind {
    /// Parses `file` or `folder`; anything else is `None`.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "file" => Some(ResourceKind::File),
            "folder" => Some(ResourceKind::Folder),
            _ => None,
        }
    }
}

/// Named request parameters. Fields the router does not know are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub content: Option<String>,
    pub query: Option<String>,
    pub sorting: Option<String>,
    pub fields: Option<Vec<String>>,
    pub destination: Option<String>,
    pub name: Option<String>,
    pub resources: Option<BulkResources>,
    pub flags: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Returns the value when it is present and non-empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Parameters {
    pub fn content(&self) -> Option<&str> {
        non_empty(&self.content)
    }

    pub fn query(&self) -> Option<&str> {
        non_empty(&self.query)
    }

    pub fn sorting(&self) -> Option<&str> {
        non_empty(&self.sorting)
    }

    pub fn destination(&self) -> Option<&str> {
        non_empty(&self.destination)
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn kind(&self) -> Option<&str> {
        non_empty(&self.kind)
    }

    /// The flags in request order, empty when absent.
    pub fn flags(&self) -> Vec<String> {
        self.flags.clone().unwrap_or_default()
    }
}

/// The verb-scoped action and parameters of one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestEnvelope {
    pub action: Option<String>,
    pub parameters: Option<Parameters>,
}

impl RequestEnvelope {
    /// An envelope naming an action and nothing else.
    pub fn action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            parameters: None,
        }
    }

    /// An envelope for the verb's default action.
    pub fn with_parameters(parameters: Parameters) -> Self {
        Self {
            action: None,
            parameters: Some(parameters),
        }
    }

    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Parses a JSON request body.
    ///
    /// # Errors
    ///
    /// `INVALID_PARAMETERS` when the body is not an envelope, including string
    /// parameters carrying another JSON type.
    pub fn from_json(json: &str) -> Result<Self, ErrorCode> {
        serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "Malformed request envelope");
            ErrorCode::InvalidParameters
        })
    }

    pub(crate) fn action_name(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub(crate) fn params(&self) -> Parameters {
        self.parameters.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_parses_from_json_and_ignores_unknown_fields() {
        let envelope = RequestEnvelope::from_json(
            r#"{"action":"search","parameters":{"noQuery":"*","sorting":"name","flags":["r"]}}"#,
        )
        .unwrap();
        assert_eq!(envelope.action.as_deref(), Some("search"));
        let params = envelope.params();
        assert_eq!(params.query(), None);
        assert_eq!(params.sorting(), Some("name"));
        assert_eq!(params.flags(), vec!["r".to_string()]);
    }

    #[test]
    fn type_field_maps_to_kind() {
        let envelope =
            RequestEnvelope::from_json(r#"{"parameters":{"type":"folder","name":"docs"}}"#).unwrap();
        let params = envelope.params();
        assert_eq!(params.kind(), Some("folder"));
        assert_eq!(params.kind().and_then(ResourceKind::parse), Some(ResourceKind::Folder));
        assert_eq!(params.name(), Some("docs"));
    }

    #[test]
    fn bulk_resources_allow_null_children() {
        let envelope = RequestEnvelope::from_json(
            r#"{"action":"bulk","parameters":{"resources":{"another_cat_picture":"raw image data","the_best_cats/":null}}}"#,
        )
        .unwrap();
        let resources = envelope.params().resources.unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources["the_best_cats/"], None);
        assert_eq!(resources["another_cat_picture"].as_deref(), Some("raw image data"));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let params = Parameters {
            content: Some(String::new()),
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(params.content(), None);
        assert_eq!(params.name(), None);
    }

    #[test]
    fn flags_default_to_empty_and_keep_order() {
        assert!(Parameters::default().flags().is_empty());
        let params = Parameters {
            flags: Some(vec!["u".into(), "f".into(), "r".into()]),
            ..Default::default()
        };
        assert_eq!(params.flags(), vec!["u", "f", "r"]);
    }

    #[test]
    fn malformed_envelope_is_invalid_parameters() {
        let content = RequestEnvelope::from_json(r#"{"parameters":{"content":{"bytes":[1,2]}}}"#);
        assert_eq!(content, Err(ErrorCode::InvalidParameters));
        assert_eq!(content.unwrap_err().response().status, 501);

        let bulk = RequestEnvelope::from_json(r#"{"parameters":{"resources":{"a":7}}}"#);
        assert_eq!(bulk, Err(ErrorCode::InvalidParameters));

        assert_eq!(RequestEnvelope::from_json("not json"), Err(ErrorCode::InvalidParameters));
    }

    #[test]
    fn empty_json_object_is_default_envelope() {
        assert_eq!(RequestEnvelope::from_json("{}").unwrap(), RequestEnvelope::default());
    }
}
