use std::path::PathBuf;

use clap::Args;
use ehrgen_schema::{Loader, OverrideResolver};
use eyre::Result;

use super::{UnwrapOrExit, print_load_warnings};

#[derive(Args)]
pub struct CheckCommand {
    /// Directory containing namespaced schema definitions
    #[arg(short, long, default_value = "schemas")]
    pub schemas: PathBuf,
}

impl CheckCommand {
    /// Run the check command. Exits non-zero when any warning is found.
    pub fn run(&self) -> Result<()> {
        let loader = Loader::new(&self.schemas);

        let loaded = loader.load_all().unwrap_or_exit();
        print_load_warnings(&loaded.warnings);

        let resolver = OverrideResolver::new(&self.schemas);
        let (_, override_warnings) = resolver.resolve_all(&loaded.schemas);
        for warning in &override_warnings {
            eprintln!("warning: {warning}");
        }

        let loaded_mappings = loader.load_mappings().unwrap_or_exit();
        print_load_warnings(&loaded_mappings.warnings);

        let warning_count =
            loaded.warnings.len() + override_warnings.len() + loaded_mappings.warnings.len();
        if warning_count > 0 {
            eprintln!();
            eprintln!(
                "{} warning{} found",
                warning_count,
                if warning_count == 1 { "" } else { "s" }
            );
            std::process::exit(1);
        }

        println!("✓ {} is valid", self.schemas.display());
        println!(
            "  {} schema{}, {} mapping{}",
            loaded.schemas.len(),
            if loaded.schemas.len() == 1 { "" } else { "s" },
            loaded_mappings.mappings.len(),
            if loaded_mappings.mappings.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }
}
