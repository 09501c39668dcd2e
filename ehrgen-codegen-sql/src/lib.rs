//! SQL DDL generator (PostgreSQL dialect).
//!
//! Renders each schema as a `CREATE TABLE` file with composite fields
//! flattened into prefixed columns, one database schema per namespace with an
//! `init.sql` aggregate. Column comments carry descriptions and protection
//! metadata for downstream masking policy tooling.

mod generator;
mod naming;
mod type_mapper;

pub use ehrgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::SQL_NAMING;
pub use type_mapper::SqlTypeMapper;
