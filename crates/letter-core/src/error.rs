use thiserror::Error;

/// Configuration or content problems detected when building a controller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CardError {
    #[error("letter has no lines to reveal")]
    EmptyLetter,
    #[error("drag threshold must be a positive finite distance, got {0}")]
    InvalidThreshold(f32),
    #[error("timing `{name}` must be finite and non-negative, got {value}ms")]
    InvalidTiming { name: &'static str, value: f64 },
    #[error("invalid particle config: {0}")]
    InvalidParticles(&'static str),
}

/// Failures reported by an audio backend. Callers treat all of these as
/// "no sound" and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
    #[error("audio output refused to resume: {0}")]
    ResumeRejected(String),
    #[error("failed to build tone: {0}")]
    Tone(String),
}
