//! Python dataclass generator.
//!
//! Renders each schema as a `@dataclass` module, one package per namespace
//! with an `__init__.py` index, and mapping files as `map_*` functions under
//! `mappers/<source_system>/`.

mod generator;
mod naming;
mod type_mapper;

pub use ehrgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::PYTHON_NAMING;
pub use type_mapper::PythonTypeMapper;
