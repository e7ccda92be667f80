use crate::audio::WebAudioBackend;
use crate::canvas::CanvasSurface;
use crate::stage::DomStage;
use instant::Instant;
use letter_core::{ExperienceController, InstantClock, Input};

pub type Controller = ExperienceController<InstantClock, WebAudioBackend>;

/// Everything the event handlers and the frame loop share.
pub struct App {
    pub controller: Controller,
    pub stage: DomStage,
    pub canvas: CanvasSurface,
    last_instant: Instant,
}

impl App {
    pub fn new(controller: Controller, stage: DomStage, canvas: CanvasSurface) -> Self {
        Self {
            controller,
            stage,
            canvas,
            last_instant: Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.resize();
        self.controller.init();
        self.flush();
    }

    pub fn input(&mut self, input: Input) {
        self.controller.dispatch(input);
        self.flush();
    }

    pub fn resize(&mut self) {
        let (w, h) = self.canvas.sync_to_viewport();
        self.controller.resize(w, h);
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.controller.frame(dt_sec);
        self.flush();
        self.controller.render_particles(&mut self.canvas);
    }

    fn flush(&mut self) {
        let App {
            controller, stage, ..
        } = self;
        for command in controller.drain_commands() {
            stage.apply(&command);
        }
    }
}
