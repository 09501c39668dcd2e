//! SQL-specific naming conventions.

use ehrgen_codegen::NamingConvention;
use ehrgen_core::to_snake_case;

fn escape_sql_reserved(name: &str) -> String {
    format!("\"{}\"", name)
}

/// SQL naming conventions. Tables and columns are snake_case; reserved words
/// get double-quoted.
pub const SQL_NAMING: NamingConvention = NamingConvention {
    schema_to_type: to_snake_case,
    schema_to_file: to_snake_case,
    field_to_name: to_snake_case,
    reserved_words: &[
        "all", "and", "any", "as", "asc", "between", "case", "check", "column", "constraint",
        "create", "cross", "current_date", "default", "desc", "distinct", "drop", "else", "end",
        "except", "exists", "foreign", "from", "full", "group", "having", "in", "inner",
        "intersect", "into", "is", "join", "left", "like", "limit", "not", "null", "offset", "on",
        "or", "order", "outer", "primary", "references", "right", "select", "table", "then",
        "union", "unique", "update", "user", "using", "values", "when", "where", "with",
    ],
    escape_reserved: escape_sql_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_naming_table() {
        assert_eq!(SQL_NAMING.type_name("MedicationRequest"), "medication_request");
        assert_eq!(SQL_NAMING.file_name("Patient"), "patient");
    }

    #[test]
    fn test_sql_naming_column() {
        assert_eq!(SQL_NAMING.field_name("birthDate"), "birth_date");
    }

    #[test]
    fn test_sql_reserved_words() {
        assert_eq!(SQL_NAMING.safe_name("order"), "\"order\"");
        assert_eq!(SQL_NAMING.safe_name("user"), "\"user\"");
        assert_eq!(SQL_NAMING.safe_name("status"), "status");
    }
}
