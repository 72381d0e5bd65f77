//! @acp:module "Shell Command"
//! @acp:summary "Interactive home -> tasks -> submission loop"
//! @acp:domain cli
//! @acp:layer handler
//!
//! The terminal counterpart of the three-page app. The form lives on the
//! submission page only: leaving it, or a successful submit, empties it.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use super::output::{format_home, format_receipt, format_tasks};
use super::{session_rng, submit_with_spinner};
use crate::calendar::DateInfo;
use crate::flow::{Controller, Page};
use crate::submission::{FileRef, MediaKind, SubmissionForm, Submitter};
use crate::values::ValueCatalog;

/// Options for the shell command
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Date to use instead of the system date
    pub date: Option<NaiveDate>,
    /// Simulated submission time
    pub submit_delay: Duration,
    /// Pause before returning to the task list after a submission
    pub return_delay: Duration,
}

const HOME_ITEMS: [&str; 2] = ["Перейти к заданиям", "Выход"];

const SUBMISSION_ITEMS: [&str; 4] = [
    "Заполнить форму",
    "Отправить выполненное задание",
    "Назад к заданиям",
    "На главную",
];

enum Action {
    Continue,
    Quit,
}

/// Execute the shell command
pub async fn execute_shell(options: ShellOptions, catalog: &ValueCatalog) -> Result<()> {
    let mut controller = Controller::new(catalog.clone(), DateInfo::resolve(options.date));
    let submitter = Submitter::new(options.submit_delay);
    let mut rng = session_rng(None);
    let theme = ColorfulTheme::default();

    loop {
        println!();
        let action = match controller.page().clone() {
            Page::Home => {
                print!("{}", format_home(controller.date(), controller.current_value()));
                let choice = Select::with_theme(&theme)
                    .items(&HOME_ITEMS[..])
                    .default(0)
                    .interact()?;
                if choice == 0 {
                    controller.start_tasks(&mut rng)?;
                    Action::Continue
                } else {
                    Action::Quit
                }
            }

            Page::Tasks { selection } => {
                print!("{}", format_tasks(selection.as_ref()));
                let mut items: Vec<String> = selection
                    .as_ref()
                    .map(|s| {
                        s.tasks
                            .iter()
                            .enumerate()
                            .map(|(i, _)| format!("Выбрать задание {}", i + 1))
                            .collect()
                    })
                    .unwrap_or_default();
                let task_count = items.len();
                items.push("На главную".to_string());

                let choice = Select::with_theme(&theme)
                    .items(&items[..])
                    .default(0)
                    .interact()?;
                if choice < task_count {
                    controller.select_task(choice)?;
                } else {
                    controller.go_home();
                }
                Action::Continue
            }

            Page::Submission { .. } => {
                let task = controller.selected_task().unwrap_or_default().to_string();
                println!("{} {}", style("Выбранное задание:").bold(), task);
                print_form(controller.form());

                let choice = Select::with_theme(&theme)
                    .items(&SUBMISSION_ITEMS[..])
                    .default(0)
                    .interact()?;
                match choice {
                    0 => fill_form(&theme, controller.form_mut())?,
                    1 => {
                        if submit(&submitter, controller.form_mut(), &task).await {
                            tokio::time::sleep(options.return_delay).await;
                            controller.back_to_tasks()?;
                        }
                    }
                    2 => {
                        controller.back_to_tasks()?;
                    }
                    _ => {
                        controller.go_home();
                    }
                }
                Action::Continue
            }
        };

        if let Action::Quit = action {
            return Ok(());
        }
    }
}

fn print_form(form: &SubmissionForm) {
    println!("  Фамилия: {}", form.last_name);
    println!("  Имя: {}", form.first_name);
    println!("  Фото: {}, видео: {}", form.photos.len(), form.videos.len());
}

fn fill_form(theme: &ColorfulTheme, form: &mut SubmissionForm) -> Result<()> {
    form.last_name = Input::with_theme(theme)
        .with_prompt("Фамилия")
        .with_initial_text(form.last_name.clone())
        .allow_empty(true)
        .interact_text()?;
    form.first_name = Input::with_theme(theme)
        .with_prompt("Имя")
        .with_initial_text(form.first_name.clone())
        .allow_empty(true)
        .interact_text()?;

    for (kind, prompt) in [
        (MediaKind::Photo, "Фотографии (пути через запятую)"),
        (MediaKind::Video, "Видео (пути через запятую)"),
    ] {
        let raw: String = Input::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        for path in split_paths(&raw) {
            match FileRef::from_path(&path) {
                Ok(file) => form.attach(kind, file),
                Err(e) => eprintln!("{} {}: {}", style("!").yellow(), path.display(), e),
            }
        }
    }
    Ok(())
}

async fn submit(submitter: &Submitter, form: &mut SubmissionForm, task: &str) -> bool {
    match submit_with_spinner(submitter, form, task).await {
        Ok(receipt) => {
            print!("{}", format_receipt(&receipt));
            true
        }
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            false
        }
    }
}

fn split_paths(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect()
}
