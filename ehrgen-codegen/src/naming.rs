//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how schema names become type and file names, how field names are
/// converted, and how reserved words are escaped. All functions are pure, so
/// identical input always produces identical identifiers.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a schema name to a type name (e.g., "Patient" -> "Patient")
    pub schema_to_type: fn(&str) -> String,
    /// Transform a schema name to a file stem (e.g., "Patient" -> "patient")
    pub schema_to_file: fn(&str) -> String,
    /// Transform a camelCase field name to the language's idiom
    pub field_to_name: fn(&str) -> String,
    /// Reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.schema_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform for use as a file stem. File names don't need escaping.
    pub fn file_name(&self, name: &str) -> String {
        (self.schema_to_file)(name)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.field_to_name)(name);
        self.safe_name(&transformed)
    }
}
