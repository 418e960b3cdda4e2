// detector.rs - Bridges the recognition event stream to the alert surface
use crate::config::DetectorConfig;
use crate::transcript::{RecognitionEvent, TranscriptEvent};
use crate::ui::{AlertSink, Haptics};
use crossbeam_channel::Receiver;
use log::{debug, error, info, warn};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Status text while no match is showing.
pub const LISTENING_STATUS: &str = "Status: Listening...";

/// Session lifecycle. Idle moves to Listening on the explicit start action;
/// mid-session recognition errors never leave Listening, and no stop
/// operation is exposed. The session ends when the backend drops its
/// sending side of the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Listening,
}

/// Match outcome for a single transcript event. A pure function of the
/// event's transcript and the target phrase; no memory across events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionState {
    Matched,
    NotMatched,
}

impl DetectionState {
    pub fn evaluate(event: &TranscriptEvent, phrase: &str) -> Self {
        if matches(&event.transcript(), phrase) {
            DetectionState::Matched
        } else {
            DetectionState::NotMatched
        }
    }
}

/// Case-insensitive substring containment.
pub fn matches(transcript: &str, phrase: &str) -> bool {
    transcript.to_lowercase().contains(&phrase.to_lowercase())
}

/// Drives the alert surface from a stream of recognition events. One
/// detector owns one session; the config is fixed at construction.
pub struct Detector {
    config: DetectorConfig,
    state: Arc<Mutex<SessionState>>,
    sink: Option<Box<dyn AlertSink>>,
    haptics: Option<Box<dyn Haptics>>,
}

impl Detector {
    pub fn new(
        config: DetectorConfig,
        sink: Box<dyn AlertSink>,
        haptics: Option<Box<dyn Haptics>>,
    ) -> Self {
        Detector {
            config,
            state: Arc::new(Mutex::new(SessionState::Idle)),
            sink: Some(sink),
            haptics,
        }
    }

    pub fn state(&self) -> SessionState {
        *self.state.lock().unwrap()
    }

    /// Begins consuming the recognition stream on a worker thread and
    /// returns its handle. The worker runs until the sending side
    /// disconnects. A second start on the same detector is ignored.
    pub fn start(&mut self, events: Receiver<RecognitionEvent>) -> Option<JoinHandle<()>> {
        let mut state = self.state.lock().unwrap();
        if *state == SessionState::Listening {
            warn!("already listening, ignoring start request");
            return None;
        }
        *state = SessionState::Listening;
        drop(state);

        let mut sink = self.sink.take()?;
        let mut haptics = self.haptics.take();
        let config = self.config.clone();

        info!("listening for \"{}\"", config.target_phrase);
        sink.set_alert(false);
        sink.set_status(LISTENING_STATUS);

        Some(thread::spawn(move || {
            for event in events {
                match event {
                    RecognitionEvent::Transcript(event) => {
                        handle_transcript(&event, &config, sink.as_mut(), haptics.as_deref_mut());
                    }
                    RecognitionEvent::Error(code) => {
                        // Reported, not recovered: the session keeps
                        // listening with no retry.
                        error!("recognition error: {code}");
                        sink.set_status(&format!("Error: {code}"));
                    }
                }
            }
            debug!("recognition stream ended");
        }))
    }
}

fn handle_transcript(
    event: &TranscriptEvent,
    config: &DetectorConfig,
    sink: &mut dyn AlertSink,
    haptics: Option<&mut (dyn Haptics + 'static)>,
) {
    let transcript = event.transcript();
    debug!("transcript: {transcript}");

    match DetectionState::evaluate(event, &config.target_phrase) {
        DetectionState::Matched => {
            info!("target phrase detected: {}", config.target_phrase);
            sink.set_alert(true);
            sink.set_status(&format!("⚠ Name detected: {}", config.target_phrase));
            if let Some(haptics) = haptics {
                haptics.pulse(config.vibration());
            }
        }
        DetectionState::NotMatched => {
            sink.set_alert(false);
            sink.set_status(LISTENING_STATUS);
        }
    }
}
