// Shared fakes for the host-side tests.

#![allow(dead_code)]

use letter_core::*;

/// Audio backend that records what it was asked to play.
pub struct RecordingBackend {
    pub state: AudioState,
    pub resume_makes_running: bool,
    pub fail_tones: bool,
    pub resumes: usize,
    pub tones: Vec<(ToneRequest, f64)>,
}

impl RecordingBackend {
    pub fn running() -> Self {
        Self {
            state: AudioState::Running,
            ..Self::suspended()
        }
    }

    pub fn suspended() -> Self {
        Self {
            state: AudioState::Suspended,
            resume_makes_running: false,
            fail_tones: false,
            resumes: 0,
            tones: Vec::new(),
        }
    }

    pub fn unlocks_on_resume() -> Self {
        Self {
            resume_makes_running: true,
            ..Self::suspended()
        }
    }

    pub fn frequencies(&self) -> Vec<f32> {
        self.tones.iter().map(|(t, _)| t.frequency_hz).collect()
    }
}

impl AudioBackend for RecordingBackend {
    fn state(&self) -> AudioState {
        self.state
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        self.resumes += 1;
        if self.resume_makes_running {
            self.state = AudioState::Running;
            Ok(())
        } else {
            Err(AudioError::ResumeRejected("no user activation".into()))
        }
    }

    fn play_tone(&mut self, tone: &ToneRequest, offset_sec: f64) -> Result<(), AudioError> {
        if self.fail_tones {
            return Err(AudioError::Tone("oscillator refused".into()));
        }
        self.tones.push((*tone, offset_sec));
        Ok(())
    }
}

pub type TestController = ExperienceController<ManualClock, RecordingBackend>;

pub fn controller_with(
    config: ExperienceConfig,
    lines: &[&str],
    audio: RecordingBackend,
) -> (TestController, ManualClock) {
    let clock = ManualClock::new();
    let content = LetterContent::new(lines.iter().copied()).expect("letter has lines");
    let c = ExperienceController::new(config, content, clock.clone(), audio).expect("valid config");
    (c, clock)
}

/// Keepsake variant (threshold 130) with full motion.
pub fn keepsake(lines: &[&str]) -> (TestController, ManualClock) {
    controller_with(
        ExperienceConfig::new(Variant::Keepsake, MotionPreference::Full),
        lines,
        RecordingBackend::running(),
    )
}

/// Init and run the intro until the seal accepts input.
pub fn ready(c: &mut TestController, clock: &ManualClock) {
    c.init();
    clock.advance(c.config().timings.intro_ms);
    c.tick();
    assert_eq!(c.state(), ExperienceState::Ready);
}

pub fn advance(c: &mut TestController, clock: &ManualClock, ms: f64) {
    clock.advance(ms);
    c.tick();
}

pub fn drain(c: &mut TestController) -> Vec<StageCommand> {
    c.drain_commands().collect()
}

/// Non-empty line texts in emission order.
pub fn written_text(commands: &[StageCommand]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|cmd| match cmd {
            StageCommand::LineText { text, .. } if !text.is_empty() => Some(text.clone()),
            _ => None,
        })
        .collect()
}

pub fn count(commands: &[StageCommand], wanted: &StageCommand) -> usize {
    commands.iter().filter(|c| *c == wanted).count()
}

/// Deterministic xorshift in [0, 1) for property-style loops.
pub struct XorShift(pub u32);

impl XorShift {
    pub fn next_f32(&mut self) -> f32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        (x as f32) / (u32::MAX as f32)
    }
}
