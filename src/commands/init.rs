//! @acp:module "Init Command"
//! @acp:summary "Write a default project config"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `adal-week init`.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Where to write the config
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Replacement catalog to reference
    pub catalog: Option<PathBuf>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let config = Config {
        catalog: options.catalog,
        ..Config::default()
    };

    if let Some(ref catalog) = config.catalog {
        let base = options
            .path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default();
        config.load_catalog(&base)?;
        println!("{} Catalog {} is valid", style("✓").green(), catalog.display());
    }

    config.save(&options.path)?;
    println!("{} Created {}", style("✓").green(), options.path.display());

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} to see the value of the day",
        style("adal-week today").cyan()
    );
    println!(
        "  2. Run {} to pick a task and submit it",
        style("adal-week shell").cyan()
    );

    Ok(())
}
