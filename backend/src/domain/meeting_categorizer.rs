//! Buckets meetings for the history page.
//!
//! Rules are evaluated per meeting, first match wins:
//! 1. an active search term that the meeting does not contain excludes it
//! 2. stored status "canceled" → `canceled`
//! 3. instant strictly before `now` → `completed`
//! 4. instant strictly after `now` → `scheduled`
//! 5. anything else (no or unparseable instant, or exactly `now`) → `other`

use chrono::NaiveDateTime;
use tracing::debug;

use super::models::{MeetingEvent, MeetingStatus};

/// Named history bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeetingBucket {
    Scheduled,
    Completed,
    Canceled,
    Other,
}

/// Disjoint partition of a meeting collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingBuckets {
    pub scheduled: Vec<MeetingEvent>,
    pub completed: Vec<MeetingEvent>,
    pub canceled: Vec<MeetingEvent>,
    pub other: Vec<MeetingEvent>,
}

impl MeetingBuckets {
    /// `scheduled ++ completed ++ canceled ++ other`, not chronological
    pub fn all(&self) -> Vec<&MeetingEvent> {
        self.scheduled
            .iter()
            .chain(&self.completed)
            .chain(&self.canceled)
            .chain(&self.other)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scheduled.len() + self.completed.len() + self.canceled.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bucket(&self, bucket: MeetingBucket) -> &[MeetingEvent] {
        match bucket {
            MeetingBucket::Scheduled => &self.scheduled,
            MeetingBucket::Completed => &self.completed,
            MeetingBucket::Canceled => &self.canceled,
            MeetingBucket::Other => &self.other,
        }
    }

    fn push(&mut self, bucket: MeetingBucket, meeting: MeetingEvent) {
        match bucket {
            MeetingBucket::Scheduled => self.scheduled.push(meeting),
            MeetingBucket::Completed => self.completed.push(meeting),
            MeetingBucket::Canceled => self.canceled.push(meeting),
            MeetingBucket::Other => self.other.push(meeting),
        }
    }
}

/// Partition `meetings` relative to `now`, after applying the optional
/// search filter. Input order is kept inside each bucket.
pub fn categorize(
    meetings: &[MeetingEvent],
    now: NaiveDateTime,
    search_term: Option<&str>,
) -> MeetingBuckets {
    let needle = search_term
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty());

    let mut buckets = MeetingBuckets::default();
    let mut excluded = 0usize;

    for meeting in meetings {
        if let Some(needle) = &needle {
            if !matches_search(meeting, needle) {
                excluded += 1;
                continue;
            }
        }
        buckets.push(bucket_for(meeting, now), meeting.clone());
    }

    debug!(
        "Categorized {} meetings: {} scheduled, {} completed, {} canceled, {} other, {} filtered out",
        meetings.len(),
        buckets.scheduled.len(),
        buckets.completed.len(),
        buckets.canceled.len(),
        buckets.other.len(),
        excluded
    );

    buckets
}

/// Derived bucket of one meeting. Pure; never touches the stored status.
pub fn bucket_for(meeting: &MeetingEvent, now: NaiveDateTime) -> MeetingBucket {
    if meeting.status == MeetingStatus::Canceled {
        return MeetingBucket::Canceled;
    }

    match meeting.instant() {
        Ok(instant) if instant < now => MeetingBucket::Completed,
        Ok(instant) if instant > now => MeetingBucket::Scheduled,
        _ => MeetingBucket::Other,
    }
}

/// `needle` must already be lower-cased
fn matches_search(meeting: &MeetingEvent, needle: &str) -> bool {
    meeting.search_haystack().contains(needle)
}
