//! @acp:module "Values"
//! @acp:summary "Weekly value catalog and daily task sampling"
//! @acp:domain core
//! @acp:layer logic
//!
//! Each working weekday (Monday = 1 .. Saturday = 6) has one value with a
//! pool of candidate tasks. Three of them are drawn for the day.

pub mod catalog;
pub mod selector;
pub mod types;

pub use catalog::CatalogError;
pub use selector::{random_tasks, sample_tasks, TASKS_PER_DAY};
pub use types::{TaskSelection, Value, ValueCatalog, WORKING_DAYS};
