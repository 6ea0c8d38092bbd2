//! Error types for swagger-tsgen.
//!
//! Resolution is deliberately permissive: unrecognized descriptor shapes
//! degrade to `any` or `object` instead of failing. The only fatal condition
//! is `allOf` composition, which is rejected outright rather than emitted as
//! a partial type.

use thiserror::Error;

/// The top-level error type for document parsing and type resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// A type descriptor uses `allOf` composition, which this generator
    /// rejects instead of silently emitting an incomplete type.
    #[error("composed types (allOf) are not implemented")]
    ComposedTypeUnsupported,

    /// The swagger document is not valid JSON or does not match the
    /// Swagger 2.0 shape.
    #[error("failed to parse swagger document: {0}")]
    Parse(#[from] serde_json::Error),
}
