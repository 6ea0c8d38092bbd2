//! Swagger 2.0 document structs for serde deserialization.
//!
//! This module models the subset of a Swagger 2.0 document the generator
//! reads. Sections are typed just far enough to navigate; the type
//! descriptors themselves (parameters, responses, definition properties)
//! stay untyped [`serde_json::Value`] and go straight to
//! [`resolve`](crate::ir::resolve::resolve). Map sections keep document
//! order, since emission order follows it.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// Root Swagger 2.0 document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerDocument {
    /// Format version; `"2.0"` for documents this crate understands.
    pub swagger: String,
    /// API metadata.
    pub info: Info,
    /// Host serving the API, e.g. `petstore.swagger.io`.
    pub host: Option<String>,
    /// Base path prepended to every operation path.
    pub base_path: Option<String>,
    /// Transfer protocols, e.g. `["https"]`.
    #[serde(default)]
    pub schemes: Vec<String>,
    /// Document-wide MIME types operations accept.
    #[serde(default)]
    pub consumes: Vec<String>,
    /// Document-wide MIME types operations produce.
    #[serde(default)]
    pub produces: Vec<String>,
    /// URL template to path item, in document order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Named data-model definitions, in document order.
    #[serde(default)]
    pub definitions: IndexMap<String, Definition>,
    /// Security scheme definitions, left untyped.
    #[serde(default)]
    pub security_definitions: IndexMap<String, Value>,
    /// Document-wide security requirements.
    #[serde(default)]
    pub security: Vec<Value>,
    /// Link to external documentation.
    pub external_docs: Option<Value>,
}

/// API metadata from the `info` section.
#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    /// Human-readable API title.
    pub title: String,
    /// Longer API description.
    pub description: Option<String>,
    /// API version string.
    pub version: String,
}

/// Operations available on a single URL template.
///
/// Methods are explicit fields rather than a map because path items also
/// carry the reserved `parameters` key next to them.
#[derive(Debug, Clone, Deserialize)]
pub struct PathItem {
    /// GET operation.
    pub get: Option<Operation>,
    /// PUT operation.
    pub put: Option<Operation>,
    /// POST operation.
    pub post: Option<Operation>,
    /// DELETE operation.
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    pub options: Option<Operation>,
    /// HEAD operation.
    pub head: Option<Operation>,
    /// PATCH operation.
    pub patch: Option<Operation>,
    /// Parameter descriptors shared by every operation on the path.
    #[serde(default)]
    pub parameters: Vec<Value>,
}

/// A single HTTP operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Grouping tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Short summary.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Unique operation identifier, when the document provides one.
    pub operation_id: Option<String>,
    /// MIME types this operation accepts, overriding the document default.
    #[serde(default)]
    pub consumes: Vec<String>,
    /// MIME types this operation produces, overriding the document default.
    #[serde(default)]
    pub produces: Vec<String>,
    /// Parameter descriptors, ready for [`resolve`](crate::ir::resolve::resolve).
    #[serde(default)]
    pub parameters: Vec<Value>,
    /// Response descriptors by status code, ready for
    /// [`resolve`](crate::ir::resolve::resolve).
    #[serde(default)]
    pub responses: IndexMap<String, Value>,
    /// Operation-level security requirements.
    #[serde(default)]
    pub security: Vec<Value>,
    /// Link to external documentation.
    pub external_docs: Option<Value>,
}

/// A named data-model definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    /// Declared JSON type, usually `object`.
    #[serde(rename = "type")]
    pub definition_type: Option<String>,
    /// Property descriptors in document order, ready for
    /// [`resolve`](crate::ir::resolve::resolve).
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
    /// Names of required properties.
    #[serde(default)]
    pub required: Vec<String>,
    /// Literal values, for enum definitions.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    /// Element descriptor, for array definitions.
    pub items: Option<Value>,
    /// Composition members; resolving a descriptor that carries these fails
    /// with [`Error::ComposedTypeUnsupported`].
    pub all_of: Option<Vec<Value>>,
    /// Free-form description.
    pub description: Option<String>,
}

impl SwaggerDocument {
    /// Parse a swagger document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
