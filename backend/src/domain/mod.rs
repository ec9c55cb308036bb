//! # Domain Module
//!
//! Contains the rule-bearing logic of the recruiting calendar: everything
//! that decides where an event lands, what the calendar shows and which
//! history bucket a meeting belongs to. Nothing here performs IO or reads
//! the wall clock; "now" and "today" are always passed in.
//!
//! ## Module Organization
//!
//! - **date_utils**: timestamp parsing and display formatting
//! - **models**: meetings, holidays, the tagged calendar event, interviewers
//! - **event_aggregator**: merges meetings and holidays, date lookups
//! - **calendar**: calendar arithmetic and month grid generation
//! - **calendar_view**: month / day / detail state machine
//! - **meeting_categorizer**: history buckets and search filtering
//! - **interviewer_directory**: flattening of the team hierarchy
//! - **dashboard**: overview counters
//! - **interview_scheduler**: validation of interview requests into meeting plans

pub mod calendar;
pub mod calendar_view;
pub mod dashboard;
pub mod date_utils;
pub mod event_aggregator;
pub mod interview_scheduler;
pub mod interviewer_directory;
pub mod meeting_categorizer;
pub mod models;

pub use calendar::*;
pub use calendar_view::*;
pub use interview_scheduler::{plan_interview, InterviewPlan, InterviewRequest, ScheduleError};
pub use interviewer_directory::InterviewerDirectory;
pub use meeting_categorizer::{categorize, MeetingBucket, MeetingBuckets};
