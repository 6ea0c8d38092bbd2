//! Swagger type descriptor resolution.
//!
//! Descriptors arrive as untyped JSON: operation parameters, response
//! envelopes, and definition properties all share the same loose shape.
//! [`resolve`] turns any of them into a [`TypeSpec`], matching shapes in a
//! fixed precedence order and degrading to `object`/`any` for anything it
//! does not recognize. The single fatal case is `allOf` composition.

use serde_json::Value;
use tracing::warn;

use super::types::{TsType, TypeSpec};
use super::utils::trailing_segment;
use crate::error::Error;

/// Resolves a swagger type descriptor into a [`TypeSpec`].
///
/// Shapes are tried in order, first match wins:
///
/// 1. a `schema` key, as in parameter and response envelopes: recurse into
///    its value and discard the envelope;
/// 2. a string `$ref`: a reference node targeting the segment after the
///    last `/`;
/// 3. an `enum` array: a literal union of the JSON-encoded values;
/// 4. `type` of `string`, `number`/`integer`, `boolean`: the primitive;
/// 5. `type` of `array`: an array node with its `items` resolved
///    recursively (a missing `items` degrades to an empty object);
/// 6. everything else: an `any` node when the descriptor looks like a
///    titled, `minItems`-bounded stub with no `$ref`, otherwise an object
///    node with no properties.
///
/// # Errors
///
/// [`Error::ComposedTypeUnsupported`] when the descriptor reaches the
/// object fallback carrying `allOf`.
pub fn resolve(descriptor: &Value) -> Result<TypeSpec, Error> {
    if let Some(schema) = descriptor.get("schema") {
        return resolve(schema);
    }

    let description = descriptor
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    if let Some(ref_path) = descriptor.get("$ref").and_then(Value::as_str) {
        let target = trailing_segment(ref_path).to_string();
        return Ok(TypeSpec {
            description,
            ty: TsType::Ref(target),
        });
    }

    if let Some(values) = descriptor.get("enum") {
        if let Some(values) = values.as_array() {
            return Ok(TypeSpec {
                description,
                ty: TsType::Enum(literal_union(values)),
            });
        }
        if !values.is_null() {
            warn!(%values, "Ignoring non-array enum in type descriptor.");
        }
    }

    match descriptor.get("type").and_then(Value::as_str) {
        Some("string") => {
            return Ok(TypeSpec {
                description,
                ty: TsType::String,
            });
        }
        Some("number" | "integer") => {
            return Ok(TypeSpec {
                description,
                ty: TsType::Number,
            });
        }
        Some("boolean") => {
            return Ok(TypeSpec {
                description,
                ty: TsType::Boolean,
            });
        }
        Some("array") => {
            let element = resolve(descriptor.get("items").unwrap_or(&Value::Null))?;
            return Ok(TypeSpec {
                description,
                ty: TsType::Array(Box::new(element)),
            });
        }
        _ => {}
    }

    // Object-or-unknown fallback. Some generators emit titled stubs with
    // array bounds but no usable type; those resolve to `any` rather than
    // to an empty object.
    let bounded_stub = descriptor
        .get("minItems")
        .and_then(Value::as_f64)
        .is_some_and(|n| n >= 0.0)
        && descriptor.get("title").is_some()
        && !descriptor.get("$ref").is_some_and(|r| !r.is_null());
    if bounded_stub {
        return Ok(TypeSpec {
            description,
            ty: TsType::Any,
        });
    }

    if descriptor.get("allOf").is_some_and(|v| !v.is_null()) {
        return Err(Error::ComposedTypeUnsupported);
    }

    Ok(TypeSpec {
        description,
        ty: TsType::Object(Vec::new()),
    })
}

/// Renders enum values as a TypeScript literal union, preserving order:
/// `["A", 1]` becomes `"A" | 1`.
fn literal_union(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| serde_json::to_string(value).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" | ")
}
