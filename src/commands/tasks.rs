//! @acp:module "Tasks Command"
//! @acp:summary "Draw and show the three tasks of the day"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use super::output::{format_date_header, format_tasks};
use super::session_rng;
use crate::calendar::DateInfo;
use crate::values::{TaskSelection, ValueCatalog};

/// Options for the tasks command
#[derive(Debug, Clone, Default)]
pub struct TasksOptions {
    /// Date to show instead of the system date
    pub date: Option<NaiveDate>,
    /// Seed for a reproducible draw
    pub seed: Option<u64>,
    /// Output as JSON
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TasksOutput<'a> {
    date: &'a DateInfo,
    selection: Option<&'a TaskSelection>,
}

/// Execute the tasks command
pub fn execute_tasks(options: TasksOptions, catalog: &ValueCatalog) -> Result<()> {
    let info = DateInfo::resolve(options.date);
    let mut rng = session_rng(options.seed);
    let selection = catalog
        .current_value(&info)
        .map(|value| value.draw_tasks(&mut rng));

    if options.json {
        let output = TasksOutput {
            date: &info,
            selection: selection.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}\n", format_date_header(&info));
        print!("{}", format_tasks(selection.as_ref()));
    }

    Ok(())
}
