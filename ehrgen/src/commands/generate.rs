use std::path::PathBuf;

use clap::Args;
use ehrgen_codegen::Language;
use ehrgen_schema::{Loader, OverrideResolver};
use eyre::{Context, Result};

use super::{UnwrapOrExit, print_load_warnings};
use crate::language::LanguageSupport;

#[derive(Args)]
pub struct GenerateCommand {
    /// Directory containing namespaced schema definitions
    #[arg(short, long, default_value = "schemas")]
    pub schemas: PathBuf,

    /// Output directory for generated code
    #[arg(short, long, default_value = "./generated")]
    pub output: PathBuf,

    /// Target language (python, rust, typescript, sql; short forms accepted)
    #[arg(short, long, default_value = "python")]
    pub lang: String,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        // Resolve the language before touching the filesystem.
        let language: Language = match self.lang.parse() {
            Ok(language) => language,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        };
        let support = LanguageSupport::get(language);
        let generator = support.generator();

        let loader = Loader::new(&self.schemas);
        let loaded = loader.load_all().unwrap_or_exit();
        print_load_warnings(&loaded.warnings);

        let resolver = OverrideResolver::new(&self.schemas);
        let (schemas, override_warnings) = resolver.resolve_all(&loaded.schemas);
        for warning in &override_warnings {
            eprintln!("warning: {warning}");
        }

        let loaded_mappings = loader.load_mappings().unwrap_or_exit();
        print_load_warnings(&loaded_mappings.warnings);

        if self.dry_run {
            let mut files = generator.render(&schemas);
            files.extend(generator.render_mappings(&loaded_mappings.mappings));

            for file in &files {
                println!("── {} ──", file.path);
                println!("{}", file.content);
            }
            println!("── Summary ──");
            println!(
                "{} file(s) (*{}) would be generated",
                files.len(),
                support.extension
            );
            return Ok(());
        }

        let result = generator
            .generate(&schemas, &self.output)
            .wrap_err("Failed to generate schema code")?;
        let mapping_result = generator
            .generate_mappings(&loaded_mappings.mappings, &self.output)
            .wrap_err("Failed to generate mapping code")?;

        println!(
            "Generated {} {} file(s) in {}",
            result.written.len() + mapping_result.written.len(),
            language,
            self.output.display()
        );
        println!("  {} schema(s)", schemas.len());
        if !loaded_mappings.mappings.is_empty() {
            println!("  {} mapping(s)", loaded_mappings.mappings.len());
        }

        Ok(())
    }
}
