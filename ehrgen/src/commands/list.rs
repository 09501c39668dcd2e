use std::path::PathBuf;

use clap::Args;
use ehrgen_schema::Loader;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Directory containing namespaced schema definitions
    #[arg(short, long, default_value = "schemas")]
    pub schemas: PathBuf,
}

impl ListCommand {
    /// Run the list command
    pub fn run(&self) -> Result<()> {
        let names = Loader::new(&self.schemas).list_schemas().unwrap_or_exit();

        for name in &names {
            println!("{name}");
        }
        println!();
        println!(
            "{} schema{}",
            names.len(),
            if names.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }
}
