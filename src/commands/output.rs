//! @acp:module "Output Formatting"
//! @acp:summary "Plain-text views shared by the one-shot commands and the shell"
//! @acp:domain cli
//! @acp:layer presentation
//!
//! Formatters return strings so they can be tested without a terminal.

use console::style;

use crate::calendar::DateInfo;
use crate::submission::{Receipt, MSG_SUCCESS, MSG_SUCCESS_DETAIL};
use crate::values::{TaskSelection, Value};

pub const MSG_WEEKEND_TITLE: &str = "Выходной день";
pub const MSG_WEEKEND: &str = "Сегодня воскресенье. Программа работает с понедельника по субботу.";
pub const MSG_WEEKEND_HINT: &str = "Отдохните и возвращайтесь в понедельник для новых заданий!";
pub const MSG_NO_VALUE: &str = "Нет запланированной ценности на сегодня.";
pub const MSG_NO_TASKS: &str =
    "Задания доступны только в рабочие дни недели (понедельник-суббота).";

/// Six-segment weekly progress bar, filled up to the value's day
pub fn format_progress(value: &Value) -> String {
    let (done, total) = value.progress();
    (1..=total)
        .map(|day| if day <= done { '■' } else { '□' })
        .collect()
}

pub fn format_date_header(info: &DateInfo) -> String {
    format!("📅 {}, {}", info.day_name, info.full_date)
}

/// @acp:summary "Home page: date, value of the day, or the day-off notice"
pub fn format_home(info: &DateInfo, value: Option<&Value>) -> String {
    let mut out = format_date_header(info);
    out.push_str("\n\n");

    if info.is_weekend {
        out.push_str(&format!(
            "{}\n{}\n{}\n",
            style(MSG_WEEKEND_TITLE).bold(),
            MSG_WEEKEND,
            MSG_WEEKEND_HINT
        ));
        return out;
    }

    let Some(value) = value else {
        out.push_str(MSG_NO_VALUE);
        out.push('\n');
        return out;
    };

    out.push_str(&format!(
        "Ценность дня: {}\n{}\n\n{}\n\n",
        style(&value.name).cyan().bold(),
        style(format_progress(value)).yellow(),
        value.description
    ));
    out.push_str(&format!(
        "{} Выполните одно из трех предложенных заданий, которое поможет вам лучше понять и применить на практике ценность \"{}\".\n",
        style("Цель дня:").bold(),
        value.name
    ));
    out.push_str(&format!(
        "{} Выберите задание, выполните его, затем загрузите фото или видео вашей работы.\n",
        style("Как это работает:").bold()
    ));
    out
}

/// @acp:summary "Numbered task list or the no-tasks notice"
pub fn format_tasks(selection: Option<&TaskSelection>) -> String {
    match selection {
        None => format!("{}\n", MSG_NO_TASKS),
        Some(selection) => {
            let mut out = format!("{}\n", style("Выберите одно задание для выполнения:").bold());
            for (i, task) in selection.tasks.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, task));
            }
            out
        }
    }
}

pub fn format_receipt(receipt: &Receipt) -> String {
    format!(
        "{} {}\n  {}\n  {}: {}\n  Фото: {}, видео: {}\n  № {}\n",
        style("✓").green(),
        MSG_SUCCESS,
        MSG_SUCCESS_DETAIL,
        receipt.full_name,
        receipt.task,
        receipt.photos,
        receipt.videos,
        receipt.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::ValueCatalog;
    use chrono::NaiveDate;

    fn info(d: u32) -> DateInfo {
        DateInfo::for_date(NaiveDate::from_ymd_opt(2026, 10, d).unwrap())
    }

    #[test]
    fn test_progress_bar() {
        let catalog = ValueCatalog::builtin().unwrap();
        assert_eq!(format_progress(catalog.value_for_day(1).unwrap()), "■□□□□□");
        assert_eq!(format_progress(catalog.value_for_day(6).unwrap()), "■■■■■■");
    }

    #[test]
    fn test_home_on_sunday() {
        let out = format_home(&info(18), None);
        assert!(out.contains(MSG_WEEKEND));
        assert!(out.contains("Воскресенье, 18 октября 2026 г."));
    }

    #[test]
    fn test_home_without_value() {
        let out = format_home(&info(12), None);
        assert!(out.contains(MSG_NO_VALUE));
    }

    #[test]
    fn test_home_with_value() {
        let catalog = ValueCatalog::builtin().unwrap();
        let day = info(12);
        let value = catalog.current_value(&day);
        let out = format_home(&day, value);
        assert!(out.contains("Честность"));
        assert!(out.contains("Цель дня"));
    }

    #[test]
    fn test_tasks_numbered_from_one() {
        let selection = TaskSelection {
            value: "x".to_string(),
            tasks: vec!["a".into(), "b".into(), "c".into()],
        };
        let out = format_tasks(Some(&selection));
        assert!(out.contains("  1. a\n"));
        assert!(out.contains("  3. c\n"));
        assert_eq!(format_tasks(None), format!("{}\n", MSG_NO_TASKS));
    }
}
