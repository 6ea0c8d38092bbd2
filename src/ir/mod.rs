//! Intermediate type model and the passes that produce it.
//!
//! Everything downstream of document parsing lives here:
//! - [`types`]: the [`TypeSpec`] node every descriptor resolves to
//! - [`resolve`]: descriptor-to-[`TypeSpec`] resolution
//! - [`imports`]: transitive reference walking for per-file import lists
//! - [`utils`]: definition-name normalization and primitive-name mapping

pub mod imports;
pub mod resolve;
pub mod types;
pub mod utils;

pub use imports::{DefinitionClass, DefinitionEnum, find_deep_refs};
pub use types::{TsType, TypeSpec};
