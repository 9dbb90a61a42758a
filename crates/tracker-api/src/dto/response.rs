//! Response DTOs.

use serde::{Deserialize, Serialize};

use tracker_entity::Id;
use tracker_entity::stats::TaskDuration;
use tracker_service::stats::format_duration;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always `"OK"`.
    pub status: String,
}

/// Time spent on one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatResponse {
    /// Task ID.
    pub task_id: Id,
    /// Duration formatted as `{H}h{MM}m{SS}s`.
    pub time: String,
    /// Duration in whole seconds.
    pub seconds: i64,
}

impl From<&TaskDuration> for TaskStatResponse {
    fn from(stat: &TaskDuration) -> Self {
        Self {
            task_id: stat.task_id,
            time: format_duration(stat.duration),
            seconds: stat.seconds(),
        }
    }
}
