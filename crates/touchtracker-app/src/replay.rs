//! Script loading and replay.

use std::fs;
use std::path::Path;

use touchtracker_core::{
    ConfigError, DrawController, InputEvent, MenuState, StrokedLine, TrackerConfig, TrackerError,
    build_scene,
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read script {path}: {source}")]
    Script {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("event {index} rejected: {source}")]
    Event { index: usize, source: TrackerError },
}

/// Outcome of replaying one script.
#[derive(Debug)]
pub struct ReplaySummary {
    pub events: usize,
    pub redraws: usize,
    pub finished: usize,
    pub active: usize,
    pub scene: Vec<StrokedLine>,
}

/// Replay `events` against a fresh controller.
pub fn replay(events: Vec<InputEvent>, config: TrackerConfig) -> Result<ReplaySummary, AppError> {
    let mut controller = DrawController::new(config, MenuState::new());
    let count = events.len();
    let mut redraws = 0;

    for (index, event) in events.into_iter().enumerate() {
        log::trace!("Event {index}: {event:?}");
        let redraw = controller
            .handle(event)
            .map_err(|source| AppError::Event { index, source })?;
        if redraw {
            redraws += 1;
            log::debug!(
                "Event {index} redraw: {} finished, {} active, selected {:?}",
                controller.tracker().finished().len(),
                controller.tracker().active_count(),
                controller.tracker().selected()
            );
        }
    }

    let tracker = controller.tracker();
    Ok(ReplaySummary {
        events: count,
        redraws,
        finished: tracker.finished().len(),
        active: tracker.active_count(),
        scene: build_scene(tracker, controller.config()),
    })
}

/// Load a script and optional config from disk and replay it.
pub fn replay_file(script: &Path, config: Option<&Path>) -> Result<ReplaySummary, AppError> {
    let config = match config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };
    let json = fs::read_to_string(script).map_err(|source| AppError::Script {
        path: script.display().to_string(),
        source,
    })?;
    let events: Vec<InputEvent> = serde_json::from_str(&json)?;
    replay(events, config)
}
