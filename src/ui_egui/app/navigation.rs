use super::CadenceApp;
use crate::models::settings::ViewMode;
use crate::utils::time::week_dates;
use chrono::{Duration, Local, NaiveDate};

impl CadenceApp {
    pub(super) fn navigate_previous(&mut self) {
        self.current_date = step(self.current_date, self.settings.view, -1);
    }

    pub(super) fn navigate_next(&mut self) {
        self.current_date = step(self.current_date, self.settings.view, 1);
    }

    pub(super) fn jump_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
        self.scroll.reset(&self.snap_calculator());
    }

    /// Dates shown by the current view
    pub(super) fn visible_dates(&self) -> Vec<NaiveDate> {
        visible_dates(
            self.current_date,
            self.settings.view,
            self.settings.first_day_of_week,
        )
    }
}

fn step(current: NaiveDate, view: ViewMode, direction: i64) -> NaiveDate {
    current + Duration::days(view.step_days() * direction)
}

fn visible_dates(current: NaiveDate, view: ViewMode, first_day_of_week: u8) -> Vec<NaiveDate> {
    match view {
        ViewMode::Day => vec![current],
        ViewMode::Week => week_dates(current, first_day_of_week).to_vec(),
    }
}
