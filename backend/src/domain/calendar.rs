//! Calendar domain logic for the recruiting calendar.
//!
//! This module contains the calendar arithmetic (leap years, month lengths,
//! first weekday, month stepping) and builds the month grid the calendar
//! page renders. The UI only draws cells; which cells exist, what they are
//! numbered and which events they carry is decided here.

use chrono::{Datelike, Days, NaiveDate};
use shared::CalendarCellType;
use std::fmt;
use tracing::debug;

use super::date_utils;
use super::event_aggregator;
use super::models::{CalendarEvent, EventKind};

/// Weekday header, Sunday first
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Earliest and latest year the calendar navigates to
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),
    #[error("Invalid year: {0}. Must be between 1 and 9999")]
    InvalidYear(i32),
}

/// A calendar month, stored as its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear(year));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(YearMonth)
            .ok_or(CalendarError::InvalidMonth(month))
    }

    /// Month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        YearMonth(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// One calendar month back; stays put at the lower bound
    pub fn previous(&self) -> Self {
        let (month, year) = step_back(self.month(), self.year());
        Self::new(year, month).unwrap_or(*self)
    }

    /// One calendar month forward; stays put at the upper bound
    pub fn next(&self) -> Self {
        let (month, year) = step_forward(self.month(), self.year());
        Self::new(year, month).unwrap_or(*self)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", date_utils::month_label(self.year(), self.month()))
    }
}

/// A single cell of the month grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// Number printed in the cell
    pub day: u32,
    pub date: NaiveDate,
    pub cell_type: CalendarCellType,
    pub is_today: bool,
    /// Events placed on this day; empty for padding cells
    pub events: Vec<CalendarEvent>,
}

impl GridCell {
    /// Only current-month cells open the day view
    pub fn is_selectable(&self) -> bool {
        self.cell_type == CalendarCellType::CurrentMonth
    }

    pub fn has_meeting(&self) -> bool {
        event_aggregator::has_kind(&self.events, EventKind::Meeting)
    }

    pub fn has_holiday(&self) -> bool {
        event_aggregator::has_kind(&self.events, EventKind::Holiday)
    }
}

/// Month grid: whole weeks, Sunday first
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub focus: YearMonth,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days_in_month: u32,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn label(&self) -> String {
        self.focus.to_string()
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    pub fn current_month_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells
            .iter()
            .filter(|cell| cell.cell_type == CalendarCellType::CurrentMonth)
    }
}

/// Calendar service that handles calendar arithmetic and grid generation
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Build the month grid for `focus` with the given events.
    ///
    /// `today` marks the highlighted cell; it is injected so rendering is
    /// deterministic.
    pub fn generate_month_grid(
        &self,
        focus: YearMonth,
        events: &[CalendarEvent],
        today: NaiveDate,
    ) -> MonthGrid {
        let year = focus.year();
        let month = focus.month();
        let days_in_month = self.days_in_month(month, year);
        let start_offset = self.first_day_of_month(month, year);
        let total_cells = self.total_cells(start_offset, days_in_month);
        let first = focus.first_day();

        debug!(
            "Generating grid for {}: {} days, starts on weekday {}, {} cells",
            focus, days_in_month, start_offset, total_cells
        );

        let mut events_by_day = event_aggregator::group_by_day(events, year, month);
        let mut cells = Vec::with_capacity(total_cells as usize);

        // Trailing days of the previous month, counting back from the 1st
        for i in 0..start_offset {
            let date = first - Days::new(u64::from(start_offset - i));
            cells.push(GridCell {
                day: date.day(),
                date,
                cell_type: CalendarCellType::PreviousMonth,
                is_today: false,
                events: Vec::new(),
            });
        }

        for day in 1..=days_in_month {
            let date = first + Days::new(u64::from(day - 1));
            let day_events = events_by_day
                .remove(&day)
                .unwrap_or_default()
                .into_iter()
                .cloned()
                .collect();
            cells.push(GridCell {
                day,
                date,
                cell_type: CalendarCellType::CurrentMonth,
                is_today: date == today,
                events: day_events,
            });
        }

        // Leading days of the next month, numbered from 1
        let remaining = total_cells - (start_offset + days_in_month);
        for day in 1..=remaining {
            let date = first + Days::new(u64::from(days_in_month + day - 1));
            cells.push(GridCell {
                day,
                date,
                cell_type: CalendarCellType::NextMonth,
                is_today: false,
                events: Vec::new(),
            });
        }

        MonthGrid {
            focus,
            first_day_of_week: start_offset,
            days_in_month,
            cells,
        }
    }

    /// `ceil((start_offset + days_in_month) / 7) * 7`
    pub fn total_cells(&self, start_offset: u32, days_in_month: u32) -> u32 {
        (start_offset + days_in_month).div_ceil(7) * 7
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => if self.is_leap_year(year) { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        date_utils::month_name(month)
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        step_back(current_month, current_year)
    }

    /// Navigate to the next month
    pub fn next_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        step_forward(current_month, current_year)
    }
}

fn step_back(month: u32, year: i32) -> (u32, i32) {
    if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

fn step_forward(month: u32, year: i32) -> (u32, i32) {
    if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    }
}
