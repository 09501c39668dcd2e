//! Python-specific naming conventions.

use ehrgen_codegen::NamingConvention;
use ehrgen_core::{to_pascal_case, to_snake_case};

fn escape_python_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Python naming conventions.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    schema_to_type: to_pascal_case,
    schema_to_file: to_snake_case,
    field_to_name: to_snake_case,
    reserved_words: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ],
    escape_reserved: escape_python_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_naming_type() {
        assert_eq!(PYTHON_NAMING.type_name("Patient"), "Patient");
        assert_eq!(PYTHON_NAMING.type_name("medication_request"), "MedicationRequest");
    }

    #[test]
    fn test_python_naming_file() {
        assert_eq!(PYTHON_NAMING.file_name("MedicationRequest"), "medication_request");
        assert_eq!(PYTHON_NAMING.file_name("Patient"), "patient");
    }

    #[test]
    fn test_python_naming_field() {
        assert_eq!(PYTHON_NAMING.field_name("birthDate"), "birth_date");
        assert_eq!(PYTHON_NAMING.field_name("multipleBirthBoolean"), "multiple_birth_boolean");
    }

    #[test]
    fn test_python_reserved_words() {
        assert_eq!(PYTHON_NAMING.field_name("class"), "class_");
        assert_eq!(PYTHON_NAMING.field_name("import"), "import_");
        assert_eq!(PYTHON_NAMING.field_name("name"), "name");
    }
}
