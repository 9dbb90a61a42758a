//! Per-task duration aggregation over work sessions.
//!
//! Pure computation: the caller supplies the sessions, the clipping window
//! and the instant that stands in for the end of still-open sessions.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use tracker_core::types::DurationWindow;
use tracker_entity::Id;
use tracker_entity::session::Session;
use tracker_entity::stats::TaskDuration;

/// Sums the time spent on each task inside `window`.
///
/// Results are ordered by ascending duration, then by task id. Every task
/// present in `sessions` gets an entry; one whose sessions all fall outside
/// the window sums to zero. Callers that prefilter by window never see such
/// entries.
pub fn aggregate(
    sessions: &[Session],
    window: DurationWindow,
    now: DateTime<Utc>,
) -> Vec<TaskDuration> {
    let mut totals: HashMap<Id, TimeDelta> = HashMap::new();

    for session in sessions {
        let total = totals.entry(session.task_id).or_insert_with(TimeDelta::zero);
        *total = total
            .checked_add(&contribution(session, &window, now))
            .unwrap_or(TimeDelta::MAX);
    }

    let mut stats: Vec<TaskDuration> = totals
        .into_iter()
        .map(|(task_id, duration)| TaskDuration { task_id, duration })
        .collect();
    stats.sort_by(|a, b| {
        a.duration
            .cmp(&b.duration)
            .then_with(|| a.task_id.cmp(&b.task_id))
    });
    stats
}

/// Time of one session that falls within the window, never negative.
fn contribution(session: &Session, window: &DurationWindow, now: DateTime<Utc>) -> TimeDelta {
    let begin = match window.after {
        Some(after) => session.begin.max(after),
        None => session.begin,
    };

    let end = match (session.end, window.before) {
        (Some(end), Some(before)) if end <= before => end,
        (Some(end), None) => end,
        (_, Some(before)) => before,
        (None, None) => now,
    };

    (end - begin).max(TimeDelta::zero())
}
