//! Python type mapper implementation.

use ehrgen_codegen::TypeMapper;
use ehrgen_core::ScalarType;

/// Python type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    fn language(&self) -> &'static str {
        "python"
    }

    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::String
            | ScalarType::Code
            | ScalarType::Id
            | ScalarType::Uri
            | ScalarType::Url => "str",
            ScalarType::Integer | ScalarType::PositiveInt | ScalarType::UnsignedInt => "int",
            ScalarType::Decimal => "float",
            ScalarType::Boolean => "bool",
            ScalarType::Date => "date",
            ScalarType::DateTime | ScalarType::Instant => "datetime",
            ScalarType::Base64Binary => "bytes",
        }
    }

    fn list_of(&self, inner: &str) -> String {
        format!("list[{}]", inner)
    }

    fn unknown_type(&self) -> &'static str {
        "Any"
    }
}
