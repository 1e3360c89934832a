//! Generation session state machine.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extractor::AttributeRecord;
use crate::imaging::ImageSummary;
use crate::scene::Scene;

/// Phase of the generation session:
/// idle → extracting → composing → ready, or → error when the image
/// pipeline fails. Error returns to the flow on the next valid input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SessionPhase {
    #[default]
    Idle,
    Extracting,
    Composing,
    Ready,
    Error,
}

impl SessionPhase {
    /// Busy phases reject new submissions until the in-flight request lands.
    pub fn is_busy(self) -> bool {
        matches!(self, SessionPhase::Extracting | SessionPhase::Composing)
    }
}

/// Everything the orchestrator holds between requests. There are no ambient
/// globals: the controller owns one of these behind a lock.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub current_text: Option<String>,
    pub record: Option<AttributeRecord>,
    pub image: Option<ImageSummary>,
    pub scene: Option<Arc<Scene>>,
    pub last_error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Phase to settle into after a non-composing step: keep showing the
    /// last scene if there is one.
    pub fn settled_phase(&self) -> SessionPhase {
        if self.scene.is_some() {
            SessionPhase::Ready
        } else {
            SessionPhase::Idle
        }
    }
}

/// Serializable view of the session for UI consumption.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub record: Option<AttributeRecord>,
    pub has_image: bool,
    pub has_scene: bool,
    pub last_error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&SessionState> for SessionSnapshot {
    fn from(state: &SessionState) -> Self {
        Self {
            phase: state.phase,
            record: state.record.clone(),
            has_image: state.image.is_some(),
            has_scene: state.scene.is_some(),
            last_error: state.last_error.clone(),
            updated_at: state.updated_at,
        }
    }
}
