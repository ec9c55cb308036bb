use chrono::NaiveDate;
use shared::{
    CalendarCell, CalendarDayResponse, CalendarEventDto, CalendarFocusDate, CalendarMonthResponse,
    CalendarViewMode, CalendarViewResponse, HolidayDto, LoadNotice,
};

use super::meeting_mapper::MeetingMapper;
use crate::domain::calendar::{GridCell, MonthGrid, YearMonth, WEEKDAYS};
use crate::domain::calendar_view::{CalendarViewState, ViewMode};
use crate::domain::date_utils;
use crate::domain::models::{CalendarEvent, HolidayEvent};

pub struct CalendarMapper;

impl CalendarMapper {
    pub fn event_to_dto(event: &CalendarEvent) -> CalendarEventDto {
        match event {
            CalendarEvent::Meeting(meeting) => CalendarEventDto::Meeting(MeetingMapper::to_dto(meeting)),
            CalendarEvent::Holiday(holiday) => CalendarEventDto::Holiday(Self::holiday_to_dto(holiday)),
        }
    }

    pub fn holiday_to_dto(holiday: &HolidayEvent) -> HolidayDto {
        HolidayDto {
            name: holiday.name.clone(),
            date: date_utils::format_iso_date(holiday.date),
            formatted_date: date_utils::format_long_date(holiday.date),
            description: holiday.description.clone(),
        }
    }

    pub fn focus_to_dto(focus: YearMonth) -> CalendarFocusDate {
        CalendarFocusDate {
            month: focus.month(),
            year: focus.year(),
        }
    }

    pub fn cell_to_dto(cell: &GridCell) -> CalendarCell {
        CalendarCell {
            day: cell.day,
            date: date_utils::format_iso_date(cell.date),
            cell_type: cell.cell_type,
            is_today: cell.is_today,
            selectable: cell.is_selectable(),
            has_meeting: cell.has_meeting(),
            has_holiday: cell.has_holiday(),
            events: cell.events.iter().map(Self::event_to_dto).collect(),
        }
    }

    pub fn month_to_dto(grid: &MonthGrid, notices: Vec<LoadNotice>) -> CalendarMonthResponse {
        CalendarMonthResponse {
            month: grid.focus.month(),
            year: grid.focus.year(),
            label: grid.label(),
            weekdays: WEEKDAYS.iter().map(|day| day.to_string()).collect(),
            first_day_of_week: grid.first_day_of_week,
            days_in_month: grid.days_in_month,
            cells: grid.cells.iter().map(Self::cell_to_dto).collect(),
            notices,
        }
    }

    pub fn day_to_dto(date: NaiveDate, events: &[&CalendarEvent]) -> CalendarDayResponse {
        CalendarDayResponse {
            date: date_utils::format_iso_date(date),
            heading: date_utils::format_day_heading(date),
            events: events.iter().map(|event| Self::event_to_dto(event)).collect(),
        }
    }

    /// Snapshot of the view state. `month` is filled in month mode and `day`
    /// in day mode; the caller computes whichever applies.
    pub fn view_to_dto(
        state: &CalendarViewState,
        month: Option<CalendarMonthResponse>,
        day: Option<CalendarDayResponse>,
    ) -> CalendarViewResponse {
        let mode = match state.mode() {
            ViewMode::Month => CalendarViewMode::Month,
            ViewMode::Day(_) => CalendarViewMode::Day,
        };

        CalendarViewResponse {
            mode,
            focus: Self::focus_to_dto(state.visible_month()),
            selected_date: state.selected_date().map(date_utils::format_iso_date),
            selected_event: state.selected_event().map(Self::event_to_dto),
            month,
            day,
        }
    }
}
