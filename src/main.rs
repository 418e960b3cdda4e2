// main.rs - Wires config, the platform speech backend, and the terminal UI
use anyhow::Result;
use crossbeam_channel::Receiver;
use log::error;
use std::io;
use std::path::Path;
use voice_alert::transcript::RecognitionEvent;
use voice_alert::ui::TerminalUi;
use voice_alert::{Detector, DetectorConfig};

#[cfg(windows)]
fn spawn_recognizer(config: &DetectorConfig) -> Result<Receiver<RecognitionEvent>> {
    voice_alert::sapi::spawn(config)
}

#[cfg(not(windows))]
fn spawn_recognizer(_config: &DetectorConfig) -> Result<Receiver<RecognitionEvent>> {
    anyhow::bail!("speech recognition is not supported on this platform")
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match DetectorConfig::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                error!("{e:#}");
                std::process::exit(2);
            }
        },
        None => DetectorConfig::default(),
    };

    // Capability check comes before any UI is wired: a missing speech
    // backend is a blocking notice, not a degraded session.
    let events = match spawn_recognizer(&config) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Speech recognition is not available: {e:#}");
            std::process::exit(1);
        }
    };

    println!(
        "Detecting \"{}\" (language {}). Press Enter to start listening.",
        config.target_phrase, config.language
    );
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        std::process::exit(1);
    }

    // No vibration capability on desktop; the pulse is skipped.
    let mut detector = Detector::new(config, Box::new(TerminalUi::new()), None);
    if let Some(worker) = detector.start(events) {
        let _ = worker.join();
    }
    println!();
}
