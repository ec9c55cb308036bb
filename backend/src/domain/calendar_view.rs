//! # Calendar View State
//!
//! State machine behind the calendar page.
//!
//! ## States
//! - `Month`: month grid for `visible_month`
//! - `Day(selected_date)`: events of one date
//!
//! An event detail overlay can be opened on top of either state without
//! changing it. The state is long-lived for the session; there is no
//! terminal state.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use super::calendar::{CalendarService, MonthGrid, YearMonth};
use super::event_aggregator;
use super::models::CalendarEvent;

/// Primary calendar mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Day(NaiveDate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarViewState {
    mode: ViewMode,
    visible_month: YearMonth,
    detail: Option<CalendarEvent>,
}

impl CalendarViewState {
    /// Month view of the month containing `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self::for_month(YearMonth::containing(now.date()))
    }

    pub fn for_month(visible_month: YearMonth) -> Self {
        Self {
            mode: ViewMode::Month,
            visible_month,
            detail: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn visible_month(&self) -> YearMonth {
        self.visible_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        match self.mode {
            ViewMode::Day(date) => Some(date),
            ViewMode::Month => None,
        }
    }

    pub fn selected_event(&self) -> Option<&CalendarEvent> {
        self.detail.as_ref()
    }

    pub fn is_month_view(&self) -> bool {
        self.mode == ViewMode::Month
    }

    pub fn is_day_view(&self) -> bool {
        matches!(self.mode, ViewMode::Day(_))
    }

    /// Shift the visible month back by one. Only applies in month view;
    /// returns whether the transition happened.
    pub fn go_to_previous_month(&mut self) -> bool {
        if !self.is_month_view() {
            debug!("Ignoring previous-month navigation outside month view");
            return false;
        }
        self.visible_month = self.visible_month.previous();
        info!("📅 Navigated to previous month: {}", self.visible_month);
        true
    }

    /// Shift the visible month forward by one. Only applies in month view;
    /// returns whether the transition happened.
    pub fn go_to_next_month(&mut self) -> bool {
        if !self.is_month_view() {
            debug!("Ignoring next-month navigation outside month view");
            return false;
        }
        self.visible_month = self.visible_month.next();
        info!("📅 Navigated to next month: {}", self.visible_month);
        true
    }

    /// Open the day view for `date`. The visible month follows the date so
    /// that going back lands on the month the day belongs to.
    pub fn view_date(&mut self, date: NaiveDate) {
        self.mode = ViewMode::Day(date);
        self.visible_month = YearMonth::containing(date);
        info!("📅 Viewing day {}", date);
    }

    pub fn back_to_month_view(&mut self) {
        self.mode = ViewMode::Month;
        info!("📅 Back to month view: {}", self.visible_month);
    }

    /// Open the detail overlay; the month/day state is untouched
    pub fn select_event(&mut self, event: CalendarEvent) {
        debug!("Opening detail for {:?} '{}'", event.kind(), event.title());
        self.detail = Some(event);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Events for the selected day; empty in month view
    pub fn day_events<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        match self.mode {
            ViewMode::Day(date) => event_aggregator::events_on_date(events, date),
            ViewMode::Month => Vec::new(),
        }
    }

    /// Grid for the visible month
    pub fn month_grid(
        &self,
        calendar: &CalendarService,
        events: &[CalendarEvent],
        today: NaiveDate,
    ) -> MonthGrid {
        calendar.generate_month_grid(self.visible_month, events, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{HolidayEvent, MeetingEvent};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        date(2025, 6, 13).and_hms_opt(9, 30, 0).unwrap()
    }

    #[test]
    fn test_initial_state_is_month_of_now() {
        let state = CalendarViewState::new(now());

        assert!(state.is_month_view());
        assert_eq!(state.visible_month(), YearMonth::new(2025, 6).unwrap());
        assert_eq!(state.selected_date(), None);
        assert!(state.selected_event().is_none());
    }

    #[test]
    fn test_next_then_previous_is_identity() {
        let original = CalendarViewState::new(now());
        let mut state = original.clone();

        assert!(state.go_to_next_month());
        assert_eq!(state.visible_month(), YearMonth::new(2025, 7).unwrap());
        assert!(state.go_to_previous_month());
        assert_eq!(state, original);
    }

    #[test]
    fn test_navigation_rolls_over_years() {
        let mut state = CalendarViewState::for_month(YearMonth::new(2025, 12).unwrap());
        state.go_to_next_month();
        assert_eq!(state.visible_month(), YearMonth::new(2026, 1).unwrap());

        state.go_to_previous_month();
        state.go_to_previous_month();
        assert_eq!(state.visible_month(), YearMonth::new(2025, 11).unwrap());
    }

    #[test]
    fn test_day_view_round_trip() {
        let mut state = CalendarViewState::new(now());

        state.view_date(date(2025, 6, 20));
        assert!(state.is_day_view());
        assert_eq!(state.selected_date(), Some(date(2025, 6, 20)));

        state.back_to_month_view();
        assert!(state.is_month_view());
        assert_eq!(state.selected_date(), None);
        assert_eq!(state.visible_month(), YearMonth::new(2025, 6).unwrap());
    }

    #[test]
    fn test_month_navigation_ignored_in_day_view() {
        let mut state = CalendarViewState::new(now());
        state.view_date(date(2025, 6, 20));

        assert!(!state.go_to_next_month());
        assert!(!state.go_to_previous_month());
        assert_eq!(state.selected_date(), Some(date(2025, 6, 20)));
        assert_eq!(state.visible_month(), YearMonth::new(2025, 6).unwrap());
    }

    #[test]
    fn test_detail_overlay_is_orthogonal() {
        let holiday = CalendarEvent::Holiday(HolidayEvent::new("Diwali", date(2025, 10, 20)));
        let mut state = CalendarViewState::new(now());

        state.select_event(holiday.clone());
        assert!(state.is_month_view());
        assert_eq!(state.selected_event(), Some(&holiday));

        state.view_date(date(2025, 10, 20));
        assert_eq!(state.selected_event(), Some(&holiday));

        state.close_detail();
        assert!(state.selected_event().is_none());
        assert_eq!(state.selected_date(), Some(date(2025, 10, 20)));
    }

    #[test]
    fn test_day_events_follow_selection() {
        let events = event_aggregator::aggregate(
            vec![MeetingEvent::new("m1", "Team Sync", Some("2025-06-20T10:00"))],
            vec![HolidayEvent::new("Holiday", date(2025, 6, 21))],
        );
        let mut state = CalendarViewState::new(now());
        assert!(state.day_events(&events).is_empty());

        state.view_date(date(2025, 6, 20));
        let day = state.day_events(&events);
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].key(), "m1");
    }

    #[test]
    fn test_month_grid_uses_visible_month() {
        let calendar = CalendarService::new();
        let mut state = CalendarViewState::new(now());
        state.go_to_next_month();

        let grid = state.month_grid(&calendar, &[], now().date());
        assert_eq!(grid.focus, YearMonth::new(2025, 7).unwrap());
        assert!(grid.cells.iter().all(|c| !c.is_today));
    }
}
