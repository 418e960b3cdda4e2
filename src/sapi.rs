// sapi.rs - Windows Speech Recognition backend over sapi-lite
use crate::config::DetectorConfig;
use crate::transcript::{ErrorCode, RecognitionEvent, TranscriptEvent, TranscriptFragment};
use anyhow::{anyhow, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, error, info};
use sapi_lite::stt::{Recognizer, Rule, SyncContext};
use std::thread;
use std::time::Duration;

const RECOGNIZE_TIMEOUT: Duration = Duration::from_millis(500);

/// Initializes SAPI and pumps recognition results on a worker thread.
/// Fails when the platform speech capability is unavailable; mid-session
/// recognizer errors are delivered as events on the returned channel.
///
/// SAPI recognizes against a grammar rather than free dictation, so the
/// grammar is seeded with the target phrase; recognized utterances still
/// flow through the detector's normal matching path. The recognizer
/// language follows the system speech settings.
pub fn spawn(config: &DetectorConfig) -> Result<Receiver<RecognitionEvent>> {
    sapi_lite::initialize().map_err(|e| anyhow!("failed to initialize SAPI: {:?}", e))?;

    let recognizer =
        Recognizer::new().map_err(|e| anyhow!("failed to create recognizer: {:?}", e))?;

    let (sender, receiver) = unbounded();
    let phrase = config.target_phrase.clone();
    let language = config.language.clone();

    thread::spawn(move || {
        info!("starting SAPI recognition (configured language {language})");
        if let Err(e) = pump(&recognizer, &phrase, &sender) {
            error!("SAPI recognition loop failed: {e:#}");
            let _ = sender.send(RecognitionEvent::Error(ErrorCode::Other(format!("{e:#}"))));
        }
        sapi_lite::finalize();
    });

    Ok(receiver)
}

fn pump(recognizer: &Recognizer, phrase: &str, events: &Sender<RecognitionEvent>) -> Result<()> {
    let ctx = SyncContext::new(recognizer)
        .map_err(|e| anyhow!("failed to create recognition context: {:?}", e))?;

    let grammar = ctx
        .grammar_builder()
        .add_rule(&Rule::text(phrase))
        .build()
        .map_err(|e| anyhow!("failed to create grammar: {:?}", e))?;
    grammar
        .set_enabled(true)
        .map_err(|e| anyhow!("failed to enable grammar: {:?}", e))?;

    loop {
        match ctx.recognize(RECOGNIZE_TIMEOUT) {
            Ok(Some(recognized)) => {
                let text = recognized.text.to_string_lossy().into_owned();
                debug!("recognized: {text}");
                let event =
                    TranscriptEvent::new(vec![TranscriptFragment::finalized(text)], 0);
                if events.send(RecognitionEvent::Transcript(event)).is_err() {
                    break;
                }
            }
            Ok(None) => {
                // Timeout with no speech; keep listening.
            }
            Err(e) => {
                let code = ErrorCode::Other(format!("{:?}", e));
                if events.send(RecognitionEvent::Error(code)).is_err() {
                    break;
                }
            }
        }
    }

    debug!("SAPI recognition stopped");
    Ok(())
}
