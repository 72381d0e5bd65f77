//! @acp:module "Flow"
//! @acp:summary "Navigation between home, task list and submission pages"
//! @acp:domain core
//! @acp:layer logic
//!
//! Transitions are pure: `transition(&page, event)` either yields the next
//! page or a `FlowError`, never touching the current one. The `Controller`
//! owns the page and draws the task sample once per visit to the task list.

pub mod controller;

pub use controller::Controller;

use serde::Serialize;
use thiserror::Error;

use crate::values::TaskSelection;

/// @acp:summary "Current page of the shell"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum Page {
    Home,
    /// `None` renders the "no tasks available" state
    Tasks { selection: Option<TaskSelection> },
    Submission { selection: TaskSelection, index: usize },
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Tasks { .. } => "tasks",
            Page::Submission { .. } => "submission",
        }
    }
}

/// User actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Open the task list with an already drawn selection
    StartTasks(Option<TaskSelection>),
    /// Pick a task by its displayed (0-based) position
    SelectTask(usize),
    BackToTasks,
    GoHome,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("the task list can only be opened from the home page (currently on {0})")]
    NotOnHome(&'static str),

    #[error("tasks can only be chosen from the task list (currently on {0})")]
    NotOnTasks(&'static str),

    #[error("there is nothing to go back from on the {0} page")]
    NotOnSubmission(&'static str),

    #[error("no tasks are available today")]
    NoTasksAvailable,

    #[error("task {index} does not exist, {len} tasks are shown")]
    TaskIndexOutOfRange { index: usize, len: usize },
}

/// @acp:summary "Compute the page that follows an event"
pub fn transition(page: &Page, event: Event) -> Result<Page, FlowError> {
    match (page, event) {
        (_, Event::GoHome) => Ok(Page::Home),

        (Page::Home, Event::StartTasks(selection)) => Ok(Page::Tasks { selection }),
        (other, Event::StartTasks(_)) => Err(FlowError::NotOnHome(other.name())),

        (Page::Tasks { selection: None }, Event::SelectTask(_)) => {
            Err(FlowError::NoTasksAvailable)
        }
        (Page::Tasks { selection: Some(selection) }, Event::SelectTask(index)) => {
            if index >= selection.len() {
                return Err(FlowError::TaskIndexOutOfRange {
                    index,
                    len: selection.len(),
                });
            }
            Ok(Page::Submission {
                selection: selection.clone(),
                index,
            })
        }
        (other, Event::SelectTask(_)) => Err(FlowError::NotOnTasks(other.name())),

        (Page::Submission { selection, .. }, Event::BackToTasks) => Ok(Page::Tasks {
            selection: Some(selection.clone()),
        }),
        (other, Event::BackToTasks) => Err(FlowError::NotOnSubmission(other.name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn selection() -> TaskSelection {
        TaskSelection {
            value: "Честность".to_string(),
            tasks: vec!["a".into(), "b".into(), "c".into()],
        }
    }

    #[test]
    fn test_home_to_tasks() {
        let next = transition(&Page::Home, Event::StartTasks(Some(selection()))).unwrap();
        assert_eq!(next, Page::Tasks { selection: Some(selection()) });
    }

    #[test]
    fn test_select_carries_frozen_selection() {
        let tasks = Page::Tasks { selection: Some(selection()) };
        let next = transition(&tasks, Event::SelectTask(2)).unwrap();
        assert_eq!(
            next,
            Page::Submission {
                selection: selection(),
                index: 2
            }
        );
    }

    #[test]
    fn test_back_restores_same_tasks() {
        let submission = Page::Submission {
            selection: selection(),
            index: 0,
        };
        let back = transition(&submission, Event::BackToTasks).unwrap();
        assert_eq!(back, Page::Tasks { selection: Some(selection()) });
    }

    #[test]
    fn test_go_home_from_anywhere() {
        let pages = [
            Page::Home,
            Page::Tasks { selection: None },
            Page::Submission {
                selection: selection(),
                index: 1,
            },
        ];
        for page in &pages {
            assert_eq!(transition(page, Event::GoHome).unwrap(), Page::Home);
        }
    }

    #[test]
    fn test_select_out_of_range() {
        let tasks = Page::Tasks { selection: Some(selection()) };
        assert_eq!(
            transition(&tasks, Event::SelectTask(3)),
            Err(FlowError::TaskIndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_select_without_tasks() {
        let tasks = Page::Tasks { selection: None };
        assert_eq!(
            transition(&tasks, Event::SelectTask(0)),
            Err(FlowError::NoTasksAvailable)
        );
    }

    #[test]
    fn test_invalid_moves() {
        assert_eq!(
            transition(&Page::Home, Event::SelectTask(0)),
            Err(FlowError::NotOnTasks("home"))
        );
        assert_eq!(
            transition(&Page::Home, Event::BackToTasks),
            Err(FlowError::NotOnSubmission("home"))
        );
        assert_eq!(
            transition(&Page::Tasks { selection: None }, Event::StartTasks(None)),
            Err(FlowError::NotOnHome("tasks"))
        );
    }
}
