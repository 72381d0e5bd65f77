//! @acp:module "Submit Command"
//! @acp:summary "One-shot simulated submission for a task of the day"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;

use super::output::{format_receipt, MSG_NO_TASKS};
use super::{session_rng, submit_with_spinner};
use crate::calendar::DateInfo;
use crate::flow::{Controller, FlowError};
use crate::submission::{FileRef, MediaKind, SubmissionError, SubmissionForm, Submitter};
use crate::values::ValueCatalog;

/// Options for the submit command
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// Date to use instead of the system date
    pub date: Option<NaiveDate>,
    /// Seed for the task draw (same seed as `tasks --seed`)
    pub seed: Option<u64>,
    /// Task number as displayed (1-based)
    pub task: usize,
    pub last_name: String,
    pub first_name: String,
    pub photos: Vec<PathBuf>,
    pub videos: Vec<PathBuf>,
}

/// Execute the submit command
pub async fn execute_submit(
    options: SubmitOptions,
    catalog: &ValueCatalog,
    delay: Duration,
) -> Result<()> {
    let mut controller = Controller::new(catalog.clone(), DateInfo::resolve(options.date));
    let mut rng = session_rng(options.seed);
    controller.start_tasks(&mut rng)?;

    match controller.select_task(options.task.saturating_sub(1)) {
        Ok(_) => {}
        Err(FlowError::NoTasksAvailable) => {
            eprintln!("{} {}", style("✗").red(), MSG_NO_TASKS);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            std::process::exit(1);
        }
    }
    let task = controller.selected_task().unwrap_or_default().to_string();
    println!("{} {}", style("Выбранное задание:").bold(), task);

    let mut form = SubmissionForm::new(options.last_name, options.first_name);
    for (kind, paths) in [
        (MediaKind::Photo, &options.photos),
        (MediaKind::Video, &options.videos),
    ] {
        for path in paths {
            let file = FileRef::from_path(path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            form.attach(kind, file);
        }
    }

    let submitter = Submitter::new(delay);
    match submit_with_spinner(&submitter, &mut form, &task).await {
        Ok(receipt) => {
            print!("{}", format_receipt(&receipt));
            Ok(())
        }
        Err(SubmissionError::Invalid(e)) => {
            eprintln!("{} {}", style("✗").red(), e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
