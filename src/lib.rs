#![forbid(unsafe_code)]

//! @acp:module "Adal Week Library"
//! @acp:summary "Value of the day, daily task sampling and simulated submissions"
//! @acp:domain core
//! @acp:layer api
//! @acp:stability stable
//!
//! # Adal Week
//!
//! The weekly values program of "Адал Азамат": every working day
//! (Monday..Saturday) has one value and a pool of tasks. Three tasks are
//! drawn for the day, the user picks one and submits a name with photos or
//! videos. Submissions are acknowledged locally and never stored.
//!
//! ## Example
//!
//! ```rust,no_run
//! use adal_week::{Controller, DateInfo, ValueCatalog};
//!
//! fn main() -> adal_week::Result<()> {
//!     let catalog = ValueCatalog::builtin()?;
//!     let mut controller = Controller::new(catalog, DateInfo::today());
//!
//!     controller.start_tasks(&mut rand::rng())?;
//!     controller.select_task(0)?;
//!     println!("{:?}", controller.selected_task());
//!
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod flow;
pub mod submission;
pub mod values;

// Re-exports
pub use calendar::DateInfo;
pub use config::Config;
pub use error::{Error, Result};
pub use flow::{transition, Controller, Event, FlowError, Page};
pub use submission::{
    FileRef, MediaKind, Receipt, SubmissionError, SubmissionForm, Submitter, ValidationError,
};
pub use values::{
    random_tasks, sample_tasks, CatalogError, TaskSelection, Value, ValueCatalog, TASKS_PER_DAY,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
