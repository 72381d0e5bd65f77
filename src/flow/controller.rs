//! @acp:module "Flow Controller"
//! @acp:summary "Owns the current page, the frozen task sample and the submission form"
//! @acp:domain core
//! @acp:layer logic
//!
//! The form belongs to the submission page: every navigation starts it empty.

use rand::Rng;

use super::{transition, Event, FlowError, Page};
use crate::calendar::DateInfo;
use crate::submission::SubmissionForm;
use crate::values::{Value, ValueCatalog};

/// Single owner of navigation state for one session
#[derive(Debug, Clone)]
pub struct Controller {
    catalog: ValueCatalog,
    date: DateInfo,
    page: Page,
    form: SubmissionForm,
}

impl Controller {
    /// Start on the home page for the given day
    pub fn new(catalog: ValueCatalog, date: DateInfo) -> Self {
        Self {
            catalog,
            date,
            page: Page::Home,
            form: SubmissionForm::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn date(&self) -> &DateInfo {
        &self.date
    }

    pub fn current_value(&self) -> Option<&Value> {
        self.catalog.current_value(&self.date)
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    /// Form of the submission page
    pub fn form_mut(&mut self) -> &mut SubmissionForm {
        &mut self.form
    }

    /// @acp:summary "Open the task list, drawing the day's sample exactly once"
    pub fn start_tasks<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Page, FlowError> {
        if !matches!(self.page, Page::Home) {
            return Err(FlowError::NotOnHome(self.page.name()));
        }
        let selection = self.current_value().map(|value| value.draw_tasks(rng));
        if let Some(ref s) = selection {
            tracing::debug!("Drew tasks for '{}': {:?}", s.value, s.tasks);
        }
        self.apply(Event::StartTasks(selection))
    }

    pub fn select_task(&mut self, index: usize) -> Result<&Page, FlowError> {
        self.apply(Event::SelectTask(index))
    }

    pub fn back_to_tasks(&mut self) -> Result<&Page, FlowError> {
        self.apply(Event::BackToTasks)
    }

    pub fn go_home(&mut self) -> &Page {
        self.page = Page::Home;
        self.form.clear();
        tracing::debug!("Navigated to home");
        &self.page
    }

    /// Text of the chosen task while on the submission page
    pub fn selected_task(&self) -> Option<&str> {
        match &self.page {
            Page::Submission { selection, index } => selection.get(*index),
            _ => None,
        }
    }

    fn apply(&mut self, event: Event) -> Result<&Page, FlowError> {
        let next = transition(&self.page, event)?;
        tracing::debug!("Navigated {} -> {}", self.page.name(), next.name());
        self.page = next;
        self.form.clear();
        Ok(&self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{FileRef, MediaKind};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn controller(y: i32, m: u32, d: u32) -> Controller {
        let date = DateInfo::for_date(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        Controller::new(ValueCatalog::builtin().unwrap(), date)
    }

    fn shown_tasks(page: &Page) -> Vec<String> {
        match page {
            Page::Tasks { selection: Some(s) } => s.tasks.clone(),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_selected_task_matches_displayed_task() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut c = controller(2026, 10, 12);
        let shown = shown_tasks(c.start_tasks(&mut rng).unwrap());
        c.select_task(1).unwrap();
        assert_eq!(c.selected_task(), Some(shown[1].as_str()));
    }

    #[test]
    fn test_back_keeps_frozen_sample() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut c = controller(2026, 10, 13);
        let first = shown_tasks(c.start_tasks(&mut rng).unwrap());
        c.select_task(0).unwrap();
        let again = shown_tasks(c.back_to_tasks().unwrap());
        assert_eq!(first, again);
    }

    #[test]
    fn test_sunday_has_no_tasks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut c = controller(2026, 10, 18);
        assert!(c.current_value().is_none());
        assert_eq!(
            c.start_tasks(&mut rng).unwrap(),
            &Page::Tasks { selection: None }
        );
        assert_eq!(c.select_task(0), Err(FlowError::NoTasksAvailable));
    }

    #[test]
    fn test_failed_transition_keeps_page() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut c = controller(2026, 10, 15);
        c.start_tasks(&mut rng).unwrap();
        let before = c.page().clone();
        assert!(c.select_task(9).is_err());
        assert_eq!(c.page(), &before);
        assert!(c.start_tasks(&mut rng).is_err());
        assert_eq!(c.page(), &before);
    }

    #[test]
    fn test_home_discards_selection() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut c = controller(2026, 10, 16);
        c.start_tasks(&mut rng).unwrap();
        c.select_task(2).unwrap();
        assert_eq!(c.go_home(), &Page::Home);
        assert!(c.selected_task().is_none());
        assert!(c.start_tasks(&mut rng).is_ok());
    }

    fn fill(c: &mut Controller) {
        let form = c.form_mut();
        form.last_name = "Ахметов".to_string();
        form.first_name = "Ерлан".to_string();
        form.attach(MediaKind::Photo, FileRef::new("a.jpg", 1, "image/jpeg"));
    }

    #[test]
    fn test_leaving_submission_discards_form() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut c = controller(2026, 10, 12);
        c.start_tasks(&mut rng).unwrap();

        c.select_task(0).unwrap();
        fill(&mut c);
        c.back_to_tasks().unwrap();
        c.select_task(2).unwrap();
        assert_eq!(c.form(), &SubmissionForm::default());

        fill(&mut c);
        c.go_home();
        c.start_tasks(&mut rng).unwrap();
        c.select_task(1).unwrap();
        assert_eq!(c.form(), &SubmissionForm::default());
    }

    #[test]
    fn test_failed_transition_keeps_form() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut c = controller(2026, 10, 12);
        c.start_tasks(&mut rng).unwrap();
        c.select_task(0).unwrap();
        fill(&mut c);
        assert!(c.select_task(1).is_err());
        assert_eq!(c.form().last_name, "Ахметов");
    }
}
