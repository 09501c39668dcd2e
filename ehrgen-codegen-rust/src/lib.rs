//! Rust struct generator.
//!
//! Renders each schema as a module of serde-derive structs, one directory per
//! namespace with a `mod.rs` index. Wire names are preserved through
//! `#[serde(rename)]` so generated types round-trip the original payloads.

mod generator;
mod naming;
mod type_mapper;

pub use ehrgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::RUST_NAMING;
pub use type_mapper::RustTypeMapper;
