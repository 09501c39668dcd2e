//! Shared code generation surface for ehrgen.
//!
//! Every target language implements the same small set of capabilities:
//! a [`TypeMapper`] from the abstract field-type vocabulary to concrete type
//! syntax, a [`NamingConvention`] for identifier conversion, and a
//! [`LanguageCodegen`] that partitions schemas by namespace and renders one
//! unit per schema plus one index unit per namespace. The [`Language`]
//! registry selects an implementation from a case-insensitive identifier.

mod builder;
mod group;
mod language;
mod naming;
mod traits;
mod type_mapper;

pub use builder::{CodeBuilder, Indent};
pub use group::group_by_namespace;
pub use language::{Language, UnknownLanguage};
pub use naming::NamingConvention;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::TypeMapper;
