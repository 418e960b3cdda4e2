//! Voice-activated phrase alert.
//!
//! A platform speech backend streams [`RecognitionEvent`]s over a channel;
//! the [`Detector`] checks each transcript update for the configured target
//! phrase (case-insensitive substring) and drives an [`ui::AlertSink`] plus
//! an optional haptic pulse.

pub mod config;
pub mod detector;
pub mod transcript;
pub mod ui;

#[cfg(windows)]
pub mod sapi;

pub use config::DetectorConfig;
pub use detector::{matches, DetectionState, Detector, SessionState, LISTENING_STATUS};
pub use transcript::{ErrorCode, RecognitionEvent, TranscriptEvent, TranscriptFragment};
