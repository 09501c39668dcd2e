//! TypeScript-specific naming conventions.

use ehrgen_codegen::NamingConvention;
use ehrgen_core::{to_camel_case, to_kebab_case, to_pascal_case};

fn escape_typescript_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// TypeScript naming conventions.
pub const TYPESCRIPT_NAMING: NamingConvention = NamingConvention {
    schema_to_type: to_pascal_case,
    schema_to_file: to_kebab_case,
    field_to_name: to_camel_case,
    reserved_words: &[
        "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
        "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
        "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
        "true", "try", "typeof", "var", "void", "while", "with",
    ],
    escape_reserved: escape_typescript_reserved,
};
