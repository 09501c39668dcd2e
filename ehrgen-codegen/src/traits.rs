//! Language-agnostic code generation traits.

use std::path::Path;

use ehrgen_core::File;
use ehrgen_schema::{Schema, SchemaMapping};
use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for emitting schema types in a new
/// target language. Rendering is pure (schemas in, file units out); the
/// default `generate` methods handle writing so every language shares the
/// same disk behavior.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "python", "sql")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "py", "sql")
    fn file_extension(&self) -> &'static str;

    /// Render schema type definitions without touching the filesystem.
    ///
    /// Returns one unit per schema plus one index unit per namespace, in
    /// the order the schemas arrive.
    fn render(&self, schemas: &[Schema]) -> Vec<PreviewFile>;

    /// Render transformation code for source-system mappings.
    ///
    /// Languages without a mapping story return an empty vec.
    fn render_mappings(&self, _mappings: &[SchemaMapping]) -> Vec<PreviewFile> {
        Vec::new()
    }

    /// Generate all schema files into the specified output directory.
    fn generate(&self, schemas: &[Schema], output_dir: &Path) -> Result<GenerateResult> {
        write_all(self.render(schemas), output_dir)
    }

    /// Generate all mapping files into the specified output directory.
    fn generate_mappings(
        &self,
        mappings: &[SchemaMapping],
        output_dir: &Path,
    ) -> Result<GenerateResult> {
        write_all(self.render_mappings(mappings), output_dir)
    }
}

fn write_all(files: Vec<PreviewFile>, output_dir: &Path) -> Result<GenerateResult> {
    let mut result = GenerateResult::default();
    for file in files {
        let written = File::new(file.path.as_str(), file.content).write_to(output_dir)?;
        result.written.push(written.display().to_string());
    }
    Ok(result)
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Absolute paths of the files written, in generation order
    pub written: Vec<String>,
}

/// A generated file for preview
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

impl PreviewFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
