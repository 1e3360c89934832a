//! Orchestrates extraction, summarization and composition for one session.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use chrono::Utc;
use log::{error, info};
use tokio::sync::Mutex;
use tokio::time;
use uuid::Uuid;

use crate::composer::compose;
use crate::extractor::{extract, generate_prompt_from_info, AttributeRecord};
use crate::imaging::{self, ImageSummary};
use crate::scene::Scene;
use crate::viewer::SceneRenderer;

/// Orchestration knobs. The artificial compose latency exists to mimic a
/// remote generation round-trip in demos; it defaults to zero and is not
/// part of the composer contract.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub compose_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            compose_delay: Duration::ZERO,
        }
    }
}

/// Single-session controller. Requests are serialized by a single-slot
/// guard: a submission that arrives while another is in flight is rejected
/// rather than queued. The active scene is swapped atomically — a scene is
/// fully composed before the state lock is taken.
pub struct SessionController {
    state: Arc<Mutex<super::SessionState>>,
    renderer: Mutex<Option<Box<dyn SceneRenderer + Send>>>,
    config: SessionConfig,
}

impl SessionController {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(super::SessionState::default())),
            renderer: Mutex::new(None),
            config,
        }
    }

    /// Attach the viewer that should adopt every newly composed scene.
    /// Replaces (and disposes) any previously attached renderer.
    pub async fn attach_renderer(&self, renderer: Box<dyn SceneRenderer + Send>) {
        let mut guard = self.renderer.lock().await;
        if let Some(mut old) = guard.replace(renderer) {
            old.dispose();
        }
    }

    pub async fn snapshot(&self) -> super::SessionSnapshot {
        super::SessionSnapshot::from(&*self.state.lock().await)
    }

    /// The currently adopted scene, if any.
    pub async fn scene(&self) -> Option<Arc<Scene>> {
        self.state.lock().await.scene.clone()
    }

    /// Submit a new text description: extract attributes, then compose with
    /// the last-known image summary.
    pub async fn submit_text(&self, text: &str) -> Result<Arc<Scene>> {
        let request_id = Uuid::new_v4();
        {
            let mut state = self.state.lock().await;
            if state.phase.is_busy() {
                bail!("a generation request is already in progress");
            }
            state.phase = super::SessionPhase::Extracting;
            state.current_text = Some(text.to_string());
            state.last_error = None;
        }

        info!("request {}: extracting attributes from text", request_id);
        let record = extract(text);
        info!(
            "request {}: prompt: {}",
            request_id,
            generate_prompt_from_info(&record)
        );

        Ok(self.run_compose(request_id, record).await)
    }

    /// Submit a new reference photo. On success the summary is retained; if
    /// a text record already exists the scene is recomposed with the new
    /// image. Returns the recomposed scene when that happens.
    pub async fn submit_image(&self, bytes: Vec<u8>) -> Result<Option<Arc<Scene>>> {
        let request_id = Uuid::new_v4();
        {
            let mut state = self.state.lock().await;
            if state.phase.is_busy() {
                bail!("a generation request is already in progress");
            }
            state.phase = super::SessionPhase::Composing;
            state.last_error = None;
        }

        info!("request {}: summarizing reference image", request_id);
        let summary = match imaging::summarize(bytes).await {
            Ok(summary) => summary,
            Err(err) => {
                error!("request {}: image summarization failed: {}", request_id, err);
                let mut state = self.state.lock().await;
                state.phase = super::SessionPhase::Error;
                state.last_error = Some(err.to_string());
                state.updated_at = Some(Utc::now());
                return Err(err.into());
            }
        };

        let record = {
            let mut state = self.state.lock().await;
            state.image = Some(summary);
            match state.record.clone() {
                Some(record) => Some(record),
                None => {
                    state.phase = state.settled_phase();
                    state.updated_at = Some(Utc::now());
                    None
                }
            }
        };

        match record {
            Some(record) => Ok(Some(self.run_compose(request_id, record).await)),
            None => Ok(None),
        }
    }

    /// Read a reference photo from disk and submit it.
    pub async fn submit_image_file(&self, path: impl AsRef<Path>) -> Result<Option<Arc<Scene>>> {
        let path = path.as_ref();
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                let imaging_err = imaging::ImagingError::FileRead(err);
                let mut state = self.state.lock().await;
                if !state.phase.is_busy() {
                    state.phase = super::SessionPhase::Error;
                    state.last_error = Some(imaging_err.to_string());
                    state.updated_at = Some(Utc::now());
                }
                return Err(imaging_err.into());
            }
        };
        self.submit_image(bytes).await
    }

    /// Recompose with the last-known record and image, unchanged.
    pub async fn regenerate(&self) -> Result<Arc<Scene>> {
        let request_id = Uuid::new_v4();
        let record = {
            let mut state = self.state.lock().await;
            if state.phase.is_busy() {
                bail!("a generation request is already in progress");
            }
            let Some(record) = state.record.clone() else {
                bail!("nothing to regenerate: submit a description first");
            };
            state.phase = super::SessionPhase::Composing;
            state.last_error = None;
            record
        };

        info!("request {}: regenerating scene", request_id);
        Ok(self.run_compose(request_id, record).await)
    }

    /// Compose and atomically adopt a new scene. The caller must already
    /// hold the busy slot (phase set to Extracting or Composing).
    async fn run_compose(&self, request_id: Uuid, record: AttributeRecord) -> Arc<Scene> {
        let image: Option<ImageSummary> = {
            let mut state = self.state.lock().await;
            state.phase = super::SessionPhase::Composing;
            state.image.clone()
        };

        if !self.config.compose_delay.is_zero() {
            time::sleep(self.config.compose_delay).await;
        }

        let scene = Arc::new(compose(&record, image.as_ref()));
        info!(
            "request {}: composed scene with {} primitives",
            request_id,
            scene.primitives.len()
        );

        {
            let mut state = self.state.lock().await;
            state.record = Some(record);
            state.scene = Some(scene.clone());
            state.phase = super::SessionPhase::Ready;
            state.updated_at = Some(Utc::now());
        }

        let mut renderer = self.renderer.lock().await;
        if let Some(renderer) = renderer.as_mut() {
            renderer.render(&scene, &scene.camera);
        }

        scene
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.renderer.try_lock() {
            if let Some(renderer) = guard.as_mut() {
                renderer.dispose();
            }
        }
    }
}
