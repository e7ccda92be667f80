//! The experience state machine.
//!
//! [`ExperienceController`] owns every piece of session state: lifecycle
//! state, the drag session, the reveal lines, the timer registry and the
//! outgoing stage commands. Input ports and due continuations are the only
//! ways in; each one consults [`next_state`] before doing anything.

use crate::clock::Clock;
use crate::config::ExperienceConfig;
use crate::content::{Hints, LetterContent};
use crate::constants::SEAL_BREAK_VIBRATE_MS;
use crate::error::CardError;
use crate::gesture::{DragSession, GestureTracker};
use crate::particles::{ParticleCanvas, ParticleField};
use crate::stage::{SealPose, SkyTone, StageCommand};
use crate::state::{next_state, ExperienceState, Trigger};
use crate::timers::{Task, TimerRegistry};
use crate::tone::{AudioBackend, Cue, ToneSynthesizer};
use crate::typewriter::{RevealLine, RevealStep, TypewriterRevealer};

/// Raw input, already reduced to what the state machine cares about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    PressStart { x: f32 },
    PressMove { x: f32 },
    PressEnd,
    Activate,
    Close,
    Replay,
}

pub struct ExperienceController<C: Clock, B: AudioBackend> {
    config: ExperienceConfig,
    hints: Hints,
    state: ExperienceState,
    opened: bool,
    closing: bool,
    initialized: bool,
    gesture: GestureTracker,
    revealer: TypewriterRevealer,
    particles: ParticleField,
    synth: ToneSynthesizer<B>,
    timers: TimerRegistry,
    clock: C,
    // Logical time of whatever is being handled: the clock for input, the
    // due time for a continuation. New delays are measured from here.
    now_ms: f64,
    commands: Vec<StageCommand>,
}

impl<C: Clock, B: AudioBackend> ExperienceController<C, B> {
    pub fn new(
        config: ExperienceConfig,
        content: LetterContent,
        clock: C,
        audio: B,
    ) -> Result<Self, CardError> {
        config.validate()?;
        if content.lines.is_empty() {
            return Err(CardError::EmptyLetter);
        }
        let now_ms = clock.now_ms();
        Ok(Self {
            gesture: GestureTracker::new(config.drag_threshold),
            revealer: TypewriterRevealer::new(content.lines),
            particles: ParticleField::new(config.particles.clone(), config.seed),
            synth: ToneSynthesizer::new(audio),
            hints: content.hints,
            config,
            state: ExperienceState::Loading,
            opened: false,
            closing: false,
            initialized: false,
            timers: TimerRegistry::new(),
            clock,
            now_ms,
            commands: Vec::new(),
        })
    }

    // ---------------- Lifecycle ----------------

    /// Start the intro. Calling it again is a no-op.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.now_ms = self.clock.now_ms();
        log::info!(
            "[state] init variant={:?} motion={:?} threshold={}",
            self.config.variant,
            self.config.motion,
            self.config.drag_threshold
        );
        for index in 0..self.revealer.lines().len() {
            self.emit(StageCommand::LineText {
                index,
                text: String::new(),
            });
        }
        self.enter_loading();
    }

    /// Tear the session down and run the intro again.
    pub fn reset(&mut self) {
        self.tick();
        if !self.transition(Trigger::Replay) {
            return;
        }
        self.initialized = true;
        self.timers.cancel_all();
        self.revealer.reset();
        self.gesture.reset();
        self.opened = false;
        self.closing = false;

        for index in 0..self.revealer.lines().len() {
            self.emit(StageCommand::LineText {
                index,
                text: String::new(),
            });
        }
        self.emit(StageCommand::OutroVisible(false));
        self.emit(StageCommand::LetterStageActive(false));
        self.emit(StageCommand::LetterFolded(true));
        self.emit(StageCommand::DaySceneVisible(true));
        self.emit(StageCommand::Sky(SkyTone::Day));
        self.emit(StageCommand::ParticlesVisible(false));
        self.emit(StageCommand::EnvelopeOpen(false));
        self.emit(StageCommand::SealCracked(false));
        self.emit(StageCommand::SealDragging(false));
        self.emit(StageCommand::SealPose(SealPose::NEUTRAL));
        self.emit(StageCommand::Progress(0.0));

        if self.transition(Trigger::ResetComplete) {
            self.enter_loading();
        }
    }

    fn enter_loading(&mut self) {
        self.emit(StageCommand::IntroVisible(true));
        self.emit(StageCommand::LoaderProgress(0.0));
        self.emit(StageCommand::Hint(String::new()));
        self.schedule(0.0, Task::FillLoader);
        self.schedule(self.config.timings.intro_ms, Task::FinishIntro);
    }

    // ---------------- Input ports ----------------

    pub fn dispatch(&mut self, input: Input) {
        match input {
            Input::PressStart { x } => self.on_press_start(x),
            Input::PressMove { x } => self.on_press_move(x),
            Input::PressEnd => self.on_press_end(),
            Input::Activate => self.on_activate(),
            Input::Close => self.on_close(),
            Input::Replay => self.on_replay(),
        }
    }

    pub fn on_press_start(&mut self, x: f32) {
        self.tick();
        if self.opened || self.gesture.is_active() {
            return;
        }
        if !self.transition(Trigger::PressStart) {
            return;
        }
        self.gesture.begin(x);
        self.synth.resume();
        self.synth.play_cue(Cue::Tap);
        self.emit(StageCommand::SealDragging(true));
        self.emit(StageCommand::Progress(0.0));
        self.emit(StageCommand::Hint(self.hints.dragging.clone()));
    }

    pub fn on_press_move(&mut self, x: f32) {
        if self.opened || self.state != ExperienceState::Dragging {
            return;
        }
        let Some(update) = self.gesture.update(x) else {
            return;
        };
        log::trace!(
            "[gesture] distance={:.1} progress={:.1}",
            update.distance,
            update.progress
        );
        self.emit(StageCommand::Progress(update.progress));
        if update.crossed {
            self.emit(StageCommand::SealPose(SealPose::NEUTRAL));
            self.open(Trigger::ThresholdCrossed);
        } else {
            self.emit(StageCommand::SealPose(update.pose));
        }
    }

    pub fn on_press_end(&mut self) {
        if self.opened || self.state != ExperienceState::Dragging {
            return;
        }
        if !self.transition(Trigger::Release) {
            return;
        }
        if let Some(session) = self.gesture.release() {
            log::debug!(
                "[gesture] released short at {:.1}px",
                session.current_distance
            );
        }
        self.emit(StageCommand::SealDragging(false));
        self.emit(StageCommand::SealPose(SealPose::NEUTRAL));
        self.emit(StageCommand::Progress(0.0));
        self.emit(StageCommand::Hint(self.hints.released.clone()));
    }

    /// Keyboard path: opens straight from `Ready` without a drag.
    pub fn on_activate(&mut self) {
        self.tick();
        if self.opened || self.state != ExperienceState::Ready {
            return;
        }
        self.synth.resume();
        self.open(Trigger::KeyActivate);
    }

    pub fn on_close(&mut self) {
        self.tick();
        if self.closing || self.state != ExperienceState::Revealing {
            return;
        }
        self.closing = true;
        self.revealer.halt();
        self.timers.cancel_task(Task::BeginReveal);
        self.timers.cancel_task(Task::RevealNext);
        self.emit(StageCommand::LetterFolded(true));
        self.emit(StageCommand::LetterStageActive(false));
        self.schedule(self.config.timings.fold_out_ms, Task::ShowOutro);
    }

    pub fn on_replay(&mut self) {
        self.reset();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.particles.resize(width, height);
    }

    // ---------------- Time ----------------

    /// Run every continuation that is due by the clock, in due order.
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        while let Some(due) = self.timers.pop_due(now) {
            self.now_ms = due.due_ms;
            self.run(due.task);
        }
        self.now_ms = now;
    }

    /// Per-frame entry point: fire due continuations, then move particles.
    pub fn frame(&mut self, dt_sec: f32) {
        self.tick();
        self.particles.step(dt_sec);
    }

    pub fn render_particles(&self, canvas: &mut impl ParticleCanvas) {
        self.particles.render(canvas);
    }

    fn run(&mut self, task: Task) {
        log::trace!("[timers] run {:?} at {:.1}ms", task, self.now_ms);
        match task {
            Task::FillLoader => {
                if self.state == ExperienceState::Loading {
                    self.emit(StageCommand::LoaderProgress(100.0));
                }
            }
            Task::FinishIntro => {
                if self.transition(Trigger::IntroComplete) {
                    self.emit(StageCommand::IntroVisible(false));
                    self.emit(StageCommand::Hint(self.hints.ready.clone()));
                }
            }
            Task::ShowLetter => {
                if self.transition(Trigger::SceneShown) {
                    self.emit(StageCommand::DaySceneVisible(false));
                    self.emit(StageCommand::Sky(SkyTone::Night));
                    self.emit(StageCommand::ParticlesVisible(true));
                    self.emit(StageCommand::LetterStageActive(true));
                    self.emit(StageCommand::LetterFolded(false));
                    self.synth.play_cue(Cue::Rustle);
                    self.schedule(self.config.timings.reveal_delay_ms, Task::BeginReveal);
                }
            }
            Task::BeginReveal => {
                if self.state == ExperienceState::Revealing && !self.closing {
                    log::info!("[reveal] writing {} line(s)", self.revealer.lines().len());
                    self.revealer.start();
                    self.reveal_next();
                }
            }
            Task::RevealNext => {
                if self.state == ExperienceState::Revealing && !self.closing {
                    self.reveal_next();
                }
            }
            Task::ShowOutro => {
                if self.transition(Trigger::FoldedOut) {
                    self.emit(StageCommand::OutroVisible(true));
                    self.synth.play_cue(Cue::Close);
                }
            }
        }
    }

    // ---------------- Sequences ----------------

    fn open(&mut self, trigger: Trigger) {
        if self.opened {
            return;
        }
        if !self.transition(trigger) {
            return;
        }
        self.opened = true;
        self.gesture.complete();
        self.emit(StageCommand::Progress(100.0));
        self.emit(StageCommand::SealDragging(false));
        self.emit(StageCommand::SealCracked(true));
        self.emit(StageCommand::EnvelopeOpen(true));
        self.emit(StageCommand::Hint(self.hints.opening.clone()));
        self.emit(StageCommand::Vibrate(SEAL_BREAK_VIBRATE_MS));
        self.synth.play_cue(Cue::Crack);
        self.schedule(self.config.timings.seal_break_ms, Task::ShowLetter);
    }

    fn reveal_next(&mut self) {
        match self.revealer.advance() {
            RevealStep::Revealed {
                line,
                ink,
                line_complete,
            } => {
                let (text, starting) = {
                    let l = &self.revealer.lines()[line];
                    (l.visible().to_string(), l.revealed_chars <= 1)
                };
                if starting {
                    self.emit(StageCommand::ScrollToLine(line));
                }
                self.emit(StageCommand::LineText { index: line, text });
                if ink {
                    self.synth.play_cue(Cue::Ink);
                }
                if self.revealer.is_finished() {
                    self.finish_reveal();
                    return;
                }
                let timings = &self.config.timings;
                let delay = if line_complete {
                    timings.line_pause_ms
                } else {
                    timings.char_interval_ms
                };
                self.schedule(delay, Task::RevealNext);
            }
            RevealStep::Finished => self.finish_reveal(),
        }
    }

    fn finish_reveal(&mut self) {
        self.revealer.halt();
        log::info!("[reveal] letter complete");
        self.emit(StageCommand::Hint(self.hints.finished.clone()));
    }

    // ---------------- Helpers ----------------

    fn transition(&mut self, trigger: Trigger) -> bool {
        match next_state(self.state, trigger) {
            Some(next) => {
                log::info!("[state] {} -> {} on {:?}", self.state, next, trigger);
                self.state = next;
                true
            }
            None => {
                log::debug!("[state] ignored {:?} while {}", trigger, self.state);
                false
            }
        }
    }

    fn schedule(&mut self, delay_ms: f64, task: Task) {
        self.timers.schedule(self.now_ms, delay_ms, task);
    }

    #[inline]
    fn emit(&mut self, command: StageCommand) {
        self.commands.push(command);
    }

    // ---------------- Accessors ----------------

    pub fn drain_commands(&mut self) -> std::vec::Drain<'_, StageCommand> {
        self.commands.drain(..)
    }

    pub fn state(&self) -> ExperienceState {
        self.state
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn progress(&self) -> f32 {
        self.gesture.progress()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.gesture.session()
    }

    pub fn lines(&self) -> &[RevealLine] {
        self.revealer.lines()
    }

    pub fn timers(&self) -> &TimerRegistry {
        &self.timers
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn synth(&self) -> &ToneSynthesizer<B> {
        &self.synth
    }

    pub fn synth_mut(&mut self) -> &mut ToneSynthesizer<B> {
        &mut self.synth
    }

    pub fn config(&self) -> &ExperienceConfig {
        &self.config
    }
}
