//! TypeScript interface generator.
//!
//! Renders each schema as an interface module, one directory per namespace
//! with an `index.ts` barrel file. Wire names are kept as-is since FHIR
//! camelCase is already idiomatic TypeScript.

mod generator;
mod naming;
mod type_mapper;

pub use ehrgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::TYPESCRIPT_NAMING;
pub use type_mapper::TypeScriptTypeMapper;
