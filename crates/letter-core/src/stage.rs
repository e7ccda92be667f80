/// Background tone of the sky layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkyTone {
    Day,
    Night,
}

/// Seal transform while it is being dragged. `Default` is the neutral pose.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SealPose {
    pub rotate_deg: f32,
    pub shift_px: f32,
}

impl SealPose {
    pub const NEUTRAL: SealPose = SealPose {
        rotate_deg: 0.0,
        shift_px: 0.0,
    };
}

/// Presentation changes the render layer must apply, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum StageCommand {
    IntroVisible(bool),
    /// Loader bar fill, 0..100.
    LoaderProgress(f32),
    Hint(String),
    /// Drag progress, 0..100.
    Progress(f32),
    SealPose(SealPose),
    SealDragging(bool),
    SealCracked(bool),
    EnvelopeOpen(bool),
    DaySceneVisible(bool),
    Sky(SkyTone),
    ParticlesVisible(bool),
    LetterStageActive(bool),
    LetterFolded(bool),
    LineText { index: usize, text: String },
    ScrollToLine(usize),
    OutroVisible(bool),
    Vibrate(u32),
}
