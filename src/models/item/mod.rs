// Item module
// Time-ranged calendar item (event, task, meeting or focus block)

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::block::BlockState;

/// What kind of block an item represents. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemKind {
    #[default]
    Event,
    Task,
    Meeting,
    Focus,
}

/// A block placed on a single day's timeline.
///
/// `start_hour` is hours since midnight (fractional, `10.5` = 10:30) and
/// `duration` is in hours. The layout and snap code only read `id`,
/// `start_hour` and `duration`; everything else is display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRangedItem {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_hour: f64,
    pub duration: f64,
    pub color: Option<String>,
    pub kind: ItemKind,
    pub calendar: String,
    /// Fixed items are solid blocks that cannot be dragged or resized
    pub is_fixed: bool,
    pub completed: bool,
    pub all_day: bool,
    pub block: BlockState,
}

impl TimeRangedItem {
    /// Create a timed item with required fields
    ///
    /// # Examples
    /// ```
    /// use cadence_calendar::models::item::TimeRangedItem;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2023, 12, 18).unwrap();
    /// let item = TimeRangedItem::new("1", "Standup", date, 9.0, 0.25);
    /// assert_eq!(item.end_hour(), 9.25);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        start_hour: f64,
        duration: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            start_hour,
            duration,
            color: None,
            kind: ItemKind::Event,
            calendar: String::from("work"),
            is_fixed: false,
            completed: false,
            all_day: false,
            block: BlockState::default(),
        }
    }

    /// Create a builder for constructing items with optional fields
    pub fn builder() -> ItemBuilder {
        ItemBuilder::new()
    }

    /// Start hour with non-finite values treated as midnight
    pub fn effective_start(&self) -> f64 {
        if self.start_hour.is_finite() {
            self.start_hour
        } else {
            0.0
        }
    }

    /// Duration with negative or non-finite values clamped to zero
    pub fn effective_duration(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.duration
        } else {
            0.0
        }
    }

    pub fn end_hour(&self) -> f64 {
        self.effective_start() + self.effective_duration()
    }

    /// Open interval overlap test: `a.start < b.end && b.start < a.end`.
    ///
    /// A zero-duration item overlaps another item only when its instant lies
    /// strictly inside the other item's interval.
    pub fn overlaps(&self, other: &TimeRangedItem) -> bool {
        self.effective_start() < other.end_hour() && other.effective_start() < self.end_hour()
    }

    /// True when the item can be moved or resized on the grid
    pub fn is_draggable(&self) -> bool {
        !self.is_fixed && !self.all_day
    }
}

/// Decides which items reach the grid and the all-day row.
///
/// Items on a hidden calendar are skipped, and so are completed items unless
/// `show_completed` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub show_completed: bool,
    pub hidden_calendars: BTreeSet<String>,
}

impl ItemFilter {
    /// Filter that lets every item through
    pub fn all() -> Self {
        Self {
            show_completed: true,
            hidden_calendars: BTreeSet::new(),
        }
    }

    pub fn admits(&self, item: &TimeRangedItem) -> bool {
        (self.show_completed || !item.completed) && !self.hidden_calendars.contains(&item.calendar)
    }
}

/// Builder for creating items with optional fields
pub struct ItemBuilder {
    id: Option<String>,
    title: Option<String>,
    date: Option<NaiveDate>,
    start_hour: f64,
    duration: f64,
    color: Option<String>,
    kind: ItemKind,
    calendar: Option<String>,
    is_fixed: bool,
    completed: bool,
    all_day: bool,
    block: BlockState,
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            date: None,
            start_hour: 0.0,
            duration: 1.0,
            color: None,
            kind: ItemKind::Event,
            calendar: None,
            is_fixed: false,
            completed: false,
            all_day: false,
            block: BlockState::default(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set start hour and duration in one go
    pub fn hours(mut self, start_hour: f64, duration: f64) -> Self {
        self.start_hour = start_hour;
        self.duration = duration;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn calendar(mut self, calendar: impl Into<String>) -> Self {
        self.calendar = Some(calendar.into());
        self
    }

    pub fn fixed(mut self, is_fixed: bool) -> Self {
        self.is_fixed = is_fixed;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    pub fn block(mut self, block: BlockState) -> Self {
        self.block = block;
        self
    }

    /// Build the item
    pub fn build(self) -> Result<TimeRangedItem, String> {
        let id = self.id.ok_or("Item id is required")?;
        let title = self.title.ok_or("Item title is required")?;
        let date = self.date.ok_or("Item date is required")?;

        if id.trim().is_empty() {
            return Err("Item id cannot be empty".to_string());
        }

        Ok(TimeRangedItem {
            id,
            title,
            date,
            start_hour: self.start_hour,
            duration: self.duration,
            color: self.color,
            kind: self.kind,
            calendar: self.calendar.unwrap_or_else(|| "work".to_string()),
            is_fixed: self.is_fixed,
            completed: self.completed,
            all_day: self.all_day,
            block: self.block,
        })
    }
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}
