use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Public holiday; has a calendar date but no time of day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayEvent {
    pub name: String,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl HolidayEvent {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            description: None,
        }
    }
}
