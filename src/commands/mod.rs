//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod init;
pub mod output;
pub mod shell;
pub mod submit;
pub mod tasks;
pub mod today;
pub mod values;

pub use init::{execute_init, InitOptions};
pub use output::{format_home, format_progress, format_receipt, format_tasks};
pub use shell::{execute_shell, ShellOptions};
pub use submit::{execute_submit, SubmitOptions};
pub use tasks::{execute_tasks, TasksOptions};
pub use today::{execute_today, TodayOptions};
pub use values::{execute_values, ValuesOptions};

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::submission::{Receipt, SubmissionError, SubmissionForm, Submitter};

/// Seeded RNG for reproducible draws, OS-seeded otherwise
pub(crate) fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Run a submission behind a spinner, like the disabled "sending" button
pub(crate) async fn submit_with_spinner(
    submitter: &Submitter,
    form: &mut SubmissionForm,
    task: &str,
) -> Result<Receipt, SubmissionError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Отправка...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = submitter.submit(form, task).await;
    spinner.finish_and_clear();
    result
}
