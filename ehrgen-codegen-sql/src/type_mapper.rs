//! SQL type mapper implementation (PostgreSQL dialect).

use ehrgen_codegen::TypeMapper;
use ehrgen_core::ScalarType;

/// SQL type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlTypeMapper;

impl TypeMapper for SqlTypeMapper {
    fn language(&self) -> &'static str {
        "sql"
    }

    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::String
            | ScalarType::Code
            | ScalarType::Id
            | ScalarType::Uri
            | ScalarType::Url => "TEXT",
            ScalarType::Integer => "BIGINT",
            ScalarType::PositiveInt | ScalarType::UnsignedInt => "INTEGER",
            ScalarType::Decimal => "DOUBLE PRECISION",
            ScalarType::Boolean => "BOOLEAN",
            ScalarType::Date => "DATE",
            ScalarType::DateTime | ScalarType::Instant => "TIMESTAMPTZ",
            ScalarType::Base64Binary => "BYTEA",
        }
    }

    fn list_of(&self, inner: &str) -> String {
        format!("{}[]", inner)
    }

    fn unknown_type(&self) -> &'static str {
        "JSONB"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_scalar_types() {
        let mapper = SqlTypeMapper;

        assert_eq!(mapper.map_token("string"), "TEXT");
        assert_eq!(mapper.map_token("code"), "TEXT");
        assert_eq!(mapper.map_token("integer"), "BIGINT");
        assert_eq!(mapper.map_token("positiveInt"), "INTEGER");
        assert_eq!(mapper.map_token("decimal"), "DOUBLE PRECISION");
        assert_eq!(mapper.map_token("boolean"), "BOOLEAN");
        assert_eq!(mapper.map_token("date"), "DATE");
        assert_eq!(mapper.map_token("datetime"), "TIMESTAMPTZ");
        assert_eq!(mapper.map_token("base64Binary"), "BYTEA");
    }

    #[test]
    fn test_sql_collections() {
        let mapper = SqlTypeMapper;

        assert_eq!(mapper.map_token("[]string"), "TEXT[]");
        assert_eq!(mapper.map_token("[]integer"), "BIGINT[]");
    }

    #[test]
    fn test_sql_unknown_types() {
        let mapper = SqlTypeMapper;

        assert_eq!(mapper.map_token("CodeableConcept"), "JSONB");
        assert_eq!(mapper.map_token("[]Identifier"), "JSONB[]");
    }
}
