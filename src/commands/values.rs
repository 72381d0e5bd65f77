//! @acp:module "Values Command"
//! @acp:summary "List the weekly value catalog"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::calendar::DateInfo;
use crate::values::ValueCatalog;

/// Options for the values command
#[derive(Debug, Clone, Default)]
pub struct ValuesOptions {
    /// Output as JSON
    pub json: bool,
}

/// Execute the values command
pub fn execute_values(options: ValuesOptions, catalog: &ValueCatalog) -> Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    let today = DateInfo::today().working_day();
    for value in catalog.week() {
        let marker = if today == Some(value.day_of_week) {
            style("→").cyan().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{} {}. {} ({} tasks)",
            marker,
            value.day_of_week,
            style(&value.name).bold(),
            value.all_tasks.len()
        );
        println!("     {}", value.description);
    }

    Ok(())
}
