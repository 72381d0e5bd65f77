//! @acp:module "Value Types"
//! @acp:summary "Value records, the weekly catalog and frozen task selections"
//! @acp:domain core
//! @acp:layer types

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::selector::{sample_tasks, TASKS_PER_DAY};
use crate::calendar::DateInfo;

/// Number of program days per week (Monday..Saturday)
pub const WORKING_DAYS: u8 = 6;

/// @acp:summary "The value of the day with its task pool"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    pub name: String,
    pub description: String,
    /// 1 (Monday) ..= 6 (Saturday)
    pub day_of_week: u8,
    pub all_tasks: Vec<String>,
}

impl Value {
    /// Position in the week, as (completed days including today, total)
    pub fn progress(&self) -> (u8, u8) {
        (self.day_of_week, WORKING_DAYS)
    }

    /// Draw today's tasks from this value's pool
    pub fn draw_tasks<R: Rng + ?Sized>(&self, rng: &mut R) -> TaskSelection {
        TaskSelection {
            value: self.name.clone(),
            tasks: sample_tasks(&self.all_tasks, TASKS_PER_DAY, rng),
        }
    }
}

/// @acp:summary "One value per working weekday"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCatalog {
    pub values: Vec<Value>,
}

impl ValueCatalog {
    pub fn value_for_day(&self, day_of_week: u8) -> Option<&Value> {
        self.values.iter().find(|v| v.day_of_week == day_of_week)
    }

    /// @acp:summary "Value scheduled for the given day, none on Sunday"
    pub fn current_value(&self, info: &DateInfo) -> Option<&Value> {
        info.working_day().and_then(|day| self.value_for_day(day))
    }

    pub fn current_value_today(&self) -> Option<&Value> {
        self.current_value(&DateInfo::today())
    }

    /// Values ordered Monday first
    pub fn week(&self) -> Vec<&Value> {
        let mut week: Vec<&Value> = self.values.iter().collect();
        week.sort_by_key(|v| v.day_of_week);
        week
    }
}

/// @acp:summary "Tasks drawn once for a value and carried through navigation"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSelection {
    /// Name of the value the tasks were drawn from
    pub value: String,
    /// Tasks in draw order
    pub tasks: Vec<String>,
}

impl TaskSelection {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tasks.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn value(day: u8, tasks: usize) -> Value {
        Value {
            name: format!("value-{}", day),
            description: String::new(),
            day_of_week: day,
            all_tasks: (0..tasks).map(|i| format!("task-{}", i)).collect(),
        }
    }

    #[test]
    fn test_current_value_follows_weekday() {
        let catalog = ValueCatalog {
            values: (1..=6).map(|d| value(d, 5)).collect(),
        };
        // 2026-10-14 is a Wednesday
        let info = DateInfo::for_date(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
        assert_eq!(catalog.current_value(&info).unwrap().day_of_week, 3);
    }

    #[test]
    fn test_current_value_missing_day_is_none() {
        let catalog = ValueCatalog {
            values: vec![value(1, 5)],
        };
        let info = DateInfo::for_date(NaiveDate::from_ymd_opt(2026, 10, 13).unwrap());
        assert!(catalog.current_value(&info).is_none());
    }

    #[test]
    fn test_current_value_today_uses_clock() {
        let catalog = ValueCatalog {
            values: (1..=6).map(|d| value(d, 5)).collect(),
        };
        let today = DateInfo::today();
        match catalog.current_value_today() {
            Some(v) => assert_eq!(Some(v.day_of_week), today.working_day()),
            None => assert!(today.is_weekend),
        }
    }

    #[test]
    fn test_draw_tasks_records_value_name() {
        let mut rng = StdRng::seed_from_u64(7);
        let selection = value(2, 6).draw_tasks(&mut rng);
        assert_eq!(selection.value, "value-2");
        assert_eq!(selection.len(), TASKS_PER_DAY);
        assert!(selection.get(3).is_none());
    }

    #[test]
    fn test_week_is_ordered() {
        let catalog = ValueCatalog {
            values: vec![value(3, 3), value(1, 3), value(2, 3)],
        };
        let days: Vec<u8> = catalog.week().iter().map(|v| v.day_of_week).collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[test]
    fn test_progress() {
        assert_eq!(value(4, 3).progress(), (4, 6));
    }
}
