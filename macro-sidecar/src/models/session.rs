use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playback status enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Cancelled,
    Failed,
}

impl PlaybackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackStatus::Pending => "pending",
            PlaybackStatus::Running => "running",
            PlaybackStatus::Completed => "completed",
            PlaybackStatus::Cancelled => "cancelled",
            PlaybackStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PlaybackStatus::Completed | PlaybackStatus::Cancelled | PlaybackStatus::Failed
        )
    }
}

/// Progress of one macro playback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSession {
    pub id: String,
    #[serde(default)]
    pub status: PlaybackStatus,
    pub loops: u32,
    /// 1-based loop currently running, 0 before the first loop
    #[serde(default)]
    pub current_loop: u32,
    /// Actions executed so far in the current loop
    #[serde(default)]
    pub current_action: usize,
    pub total_actions: usize,
    pub delay_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl PlaybackSession {
    pub fn new(loops: u32, total_actions: usize, delay_ms: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            status: PlaybackStatus::Pending,
            loops,
            current_loop: 0,
            current_action: 0,
            total_actions,
            delay_ms,
            error: None,
            started_at: None,
            completed_at: None,
        }
    }

    pub fn start(&mut self) {
        self.status = PlaybackStatus::Running;
        self.started_at = Some(Utc::now());
    }

    pub fn begin_loop(&mut self, loop_number: u32) {
        self.current_loop = loop_number;
        self.current_action = 0;
    }

    pub fn advance(&mut self) {
        self.current_action += 1;
    }

    pub fn complete(&mut self) {
        self.status = PlaybackStatus::Completed;
        self.completed_at = Some(Utc::now());
    }

    pub fn cancel(&mut self, reason: String) {
        self.status = PlaybackStatus::Cancelled;
        self.error = Some(reason);
        self.completed_at = Some(Utc::now());
    }

    pub fn fail(&mut self, error: String) {
        self.status = PlaybackStatus::Failed;
        self.error = Some(error);
        self.completed_at = Some(Utc::now());
    }
}
