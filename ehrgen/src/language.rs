//! Unified language dispatch.
//!
//! Centralizes language-specific generator creation and metadata.

use ehrgen_codegen::{Language, LanguageCodegen};
use ehrgen_codegen_python::Generator as PythonGenerator;
use ehrgen_codegen_rust::Generator as RustGenerator;
use ehrgen_codegen_sql::Generator as SqlGenerator;
use ehrgen_codegen_typescript::Generator as TypeScriptGenerator;

/// Language-specific support for code generation.
///
/// Provides metadata and generator creation for a target language.
pub struct LanguageSupport {
    language: Language,
    /// File extension with dot (e.g., ".py").
    pub extension: &'static str,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        match language {
            Language::Python => Self {
                language,
                extension: ".py",
            },
            Language::Rust => Self {
                language,
                extension: ".rs",
            },
            Language::TypeScript => Self {
                language,
                extension: ".ts",
            },
            Language::Sql => Self {
                language,
                extension: ".sql",
            },
        }
    }

    /// Create a generator for this language.
    pub fn generator(&self) -> Box<dyn LanguageCodegen> {
        match self.language {
            Language::Python => Box::new(PythonGenerator),
            Language::Rust => Box::new(RustGenerator),
            Language::TypeScript => Box::new(TypeScriptGenerator),
            Language::Sql => Box::new(SqlGenerator),
        }
    }
}
