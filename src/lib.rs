//! Type-resolution core for a Swagger 2.0 to TypeScript code generator.
//!
//! Given a parsed [`SwaggerDocument`], this crate turns the untyped type
//! descriptors found in operations and definitions into a uniform
//! [`TypeSpec`] tree ([`resolve`]), collects the transitive definition
//! references each generated file needs ([`find_deep_refs`]), and
//! normalizes bracket-generic definition names such as
//! `PagedResultDto[UserDto]` into identifier-safe ones
//! ([`ir::utils::ref_class_name`]).
//!
//! Fetching documents, rendering templates, and writing files are left to
//! the consumer; the resolved model serializes into a flat template-friendly
//! shape for that purpose.

#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

pub mod error;
pub mod ir;
pub mod spec;

pub use error::Error;
pub use ir::imports::{DefinitionClass, DefinitionEnum, find_deep_refs};
pub use ir::resolve::resolve;
pub use ir::types::{TsType, TypeSpec};
pub use spec::SwaggerDocument;
