//! @acp:module "Today Command"
//! @acp:summary "Show the date and the value of the day"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use super::output::format_home;
use crate::calendar::DateInfo;
use crate::values::{Value, ValueCatalog};

/// Options for the today command
#[derive(Debug, Clone, Default)]
pub struct TodayOptions {
    /// Date to show instead of the system date
    pub date: Option<NaiveDate>,
    /// Output as JSON
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TodayOutput<'a> {
    date: &'a DateInfo,
    value: Option<&'a Value>,
}

/// Execute the today command
pub fn execute_today(options: TodayOptions, catalog: &ValueCatalog) -> Result<()> {
    let info = DateInfo::resolve(options.date);
    let value = catalog.current_value(&info);

    if options.json {
        let output = TodayOutput { date: &info, value };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_home(&info, value));
    }

    Ok(())
}
