//! Short synthesized cues.
//!
//! A cue expands to one or two [`ToneRequest`]s. Multi-pulse cues offset the
//! later pulse on the audio clock instead of scheduling a timer, so cues are
//! never part of the cancellable session state.

use crate::constants::*;
use crate::error::AudioError;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneRequest {
    pub waveform: Waveform,
    pub frequency_hz: f32,
    pub duration_sec: f32,
    pub gain: f32,
}

impl ToneRequest {
    pub const fn new(waveform: Waveform, frequency_hz: f32, duration_sec: f32, gain: f32) -> Self {
        Self {
            waveform,
            frequency_hz,
            duration_sec,
            gain,
        }
    }

    /// Gain at `t` seconds after onset: exponential decay from `gain` to
    /// [`ENVELOPE_FLOOR`] at `duration_sec`, silent afterwards.
    pub fn envelope_at(&self, t: f32) -> f32 {
        if t < 0.0 || t > self.duration_sec || self.duration_sec <= 0.0 {
            return 0.0;
        }
        let start = self.gain.max(ENVELOPE_FLOOR);
        start * (ENVELOPE_FLOOR / start).powf(t / self.duration_sec)
    }
}

/// A tone plus its onset offset, in seconds, from the moment the cue fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CueTone {
    pub tone: ToneRequest,
    pub offset_sec: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Tap,
    Rustle,
    Crack,
    Ink,
    Close,
}

impl Cue {
    pub fn tones(self) -> SmallVec<[CueTone; 2]> {
        let at = |tone: ToneRequest, offset_sec: f64| CueTone { tone, offset_sec };
        match self {
            Cue::Tap => smallvec![at(ToneRequest::new(Waveform::Triangle, 230.0, 0.12, 0.03), 0.0)],
            Cue::Rustle => smallvec![
                at(ToneRequest::new(Waveform::Triangle, 220.0, 0.12, 0.03), 0.0),
                at(
                    ToneRequest::new(Waveform::Triangle, 280.0, 0.12, 0.02),
                    RUSTLE_SECOND_PULSE_SEC
                ),
            ],
            Cue::Crack => smallvec![
                at(ToneRequest::new(Waveform::Square, 120.0, 0.10, 0.045), 0.0),
                at(
                    ToneRequest::new(Waveform::Square, 90.0, 0.08, 0.03),
                    CRACK_SECOND_PULSE_SEC
                ),
            ],
            Cue::Ink => smallvec![at(ToneRequest::new(Waveform::Sine, 510.0, 0.12, 0.012), 0.0)],
            Cue::Close => smallvec![at(ToneRequest::new(Waveform::Sine, 300.0, 0.3, 0.03), 0.0)],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioState {
    /// No output could be created; cues are dropped for good.
    Unavailable,
    /// Created but not yet allowed to play (no user gesture yet).
    Suspended,
    Running,
}

/// The single audio output the synthesizer talks to.
pub trait AudioBackend {
    fn state(&self) -> AudioState;
    /// One best-effort attempt to bring the output to `Running`.
    fn resume(&mut self) -> Result<(), AudioError>;
    fn play_tone(&mut self, tone: &ToneRequest, offset_sec: f64) -> Result<(), AudioError>;
}

/// Backend that never makes a sound.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn state(&self) -> AudioState {
        AudioState::Unavailable
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        Err(AudioError::Unavailable("silent backend".into()))
    }

    fn play_tone(&mut self, _tone: &ToneRequest, _offset_sec: f64) -> Result<(), AudioError> {
        Ok(())
    }
}

#[derive(Debug)]
pub struct ToneSynthesizer<B: AudioBackend> {
    backend: B,
}

impl<B: AudioBackend> ToneSynthesizer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_running(&self) -> bool {
        self.backend.state() == AudioState::Running
    }

    /// Ask the output to start. Does nothing once running; failures are
    /// logged and ignored.
    pub fn resume(&mut self) {
        if self.backend.state() == AudioState::Running {
            return;
        }
        if let Err(e) = self.backend.resume() {
            log::debug!("[audio] resume failed: {}", e);
        }
    }

    /// Play a single tone now. Silently skipped until the output runs.
    pub fn play(&mut self, tone: ToneRequest) {
        self.play_at(&tone, 0.0);
    }

    pub fn play_cue(&mut self, cue: Cue) {
        if !self.is_running() {
            log::trace!("[audio] {:?} skipped, output not running", cue);
            return;
        }
        for t in cue.tones() {
            self.play_at(&t.tone, t.offset_sec);
        }
    }

    fn play_at(&mut self, tone: &ToneRequest, offset_sec: f64) {
        if !self.is_running() {
            return;
        }
        if let Err(e) = self.backend.play_tone(tone, offset_sec) {
            log::debug!("[audio] tone dropped: {}", e);
        }
    }
}
