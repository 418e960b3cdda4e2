// transcript.rs - Recognition event types shared between backends and the detector
use std::fmt;

/// One recognized text segment. Interim fragments may still be revised by
/// the recognizer; final fragments will not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFragment {
    pub text: String,
    pub is_final: bool,
}

impl TranscriptFragment {
    pub fn interim(text: impl Into<String>) -> Self {
        TranscriptFragment {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        TranscriptFragment {
            text: text.into(),
            is_final: true,
        }
    }
}

/// One recognizer callback's worth of fragments. The transcript for the
/// event is the concatenation of fragment texts from `result_index` to the
/// end, in order. Events are consumed immediately and never stored across
/// callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranscriptEvent {
    pub fragments: Vec<TranscriptFragment>,
    pub result_index: usize,
}

impl TranscriptEvent {
    pub fn new(fragments: Vec<TranscriptFragment>, result_index: usize) -> Self {
        TranscriptEvent {
            fragments,
            result_index,
        }
    }

    /// Concatenates fragment texts from `result_index` onward. Interim and
    /// final fragments are treated identically.
    pub fn transcript(&self) -> String {
        self.fragments
            .iter()
            .skip(self.result_index)
            .map(|f| f.text.as_str())
            .collect()
    }
}

/// Recognizer error codes, modeled on the Web Speech API error set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    NoSpeech,
    AudioCapture,
    NotAllowed,
    Network,
    Aborted,
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::NoSpeech => "no-speech",
            ErrorCode::AudioCapture => "audio-capture",
            ErrorCode::NotAllowed => "not-allowed",
            ErrorCode::Network => "network",
            ErrorCode::Aborted => "aborted",
            ErrorCode::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a speech backend delivers over the event channel. Mid-session
/// errors are events, not stream teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    Transcript(TranscriptEvent),
    Error(ErrorCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_concatenates_fragments_in_order() {
        let event = TranscriptEvent::new(
            vec![
                TranscriptFragment::interim("hello "),
                TranscriptFragment::interim("Adil"),
                TranscriptFragment::finalized(" is near"),
            ],
            0,
        );
        assert_eq!(event.transcript(), "hello Adil is near");
    }

    #[test]
    fn transcript_starts_at_result_index() {
        let event = TranscriptEvent::new(
            vec![
                TranscriptFragment::finalized("old utterance "),
                TranscriptFragment::interim("new "),
                TranscriptFragment::interim("words"),
            ],
            1,
        );
        assert_eq!(event.transcript(), "new words");
    }

    #[test]
    fn empty_event_yields_empty_transcript() {
        assert_eq!(TranscriptEvent::default().transcript(), "");
    }

    #[test]
    fn result_index_past_end_yields_empty_transcript() {
        let event = TranscriptEvent::new(vec![TranscriptFragment::interim("hi")], 5);
        assert_eq!(event.transcript(), "");
    }

    #[test]
    fn error_codes_render_like_the_platform() {
        assert_eq!(ErrorCode::NoSpeech.to_string(), "no-speech");
        assert_eq!(ErrorCode::Network.to_string(), "network");
        assert_eq!(ErrorCode::Other("denied".into()).to_string(), "denied");
    }
}
