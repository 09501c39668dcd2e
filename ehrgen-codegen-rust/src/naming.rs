//! Rust-specific naming conventions.

use ehrgen_codegen::NamingConvention;
use ehrgen_core::{to_pascal_case, to_snake_case};

fn escape_rust_reserved(name: &str) -> String {
    format!("r#{}", name)
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    schema_to_type: to_pascal_case,
    schema_to_file: to_snake_case,
    field_to_name: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true", "type",
        "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
        "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_rust_reserved,
};
