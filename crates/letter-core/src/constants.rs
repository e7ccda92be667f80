// Tuning constants shared by the core modules and the web front-end.

// Gesture
pub const CLASSIC_DRAG_THRESHOLD: f32 = 120.0; // px of rightward drag that breaks the seal
pub const KEEPSAKE_DRAG_THRESHOLD: f32 = 130.0;
pub const SEAL_ROTATE_DIVISOR: f32 = 10.0; // degrees per px of drag = 1 / divisor
pub const SEAL_ROTATE_MAX_DEG: f32 = 14.0;
pub const SEAL_SHIFT_DIVISOR: f32 = 4.0;
pub const SEAL_SHIFT_MAX_PX: f32 = 40.0;
pub const SEAL_BREAK_VIBRATE_MS: u32 = 35;

// Reveal cadence
pub const CLASSIC_CHAR_INTERVAL_MS: f64 = 22.0;
pub const KEEPSAKE_CHAR_INTERVAL_MS: f64 = 17.0;
pub const INK_CUE_EVERY_CHARS: usize = 7;

// Stars
pub const STAR_AREA_PER_STAR: f32 = 15_000.0; // viewport px^2 per star
pub const STAR_AREA_PER_STAR_REDUCED: f32 = 32_000.0;
pub const STAR_RADIUS_MIN: f32 = 0.3;
pub const STAR_RADIUS_SPAN: f32 = 1.6;
pub const STAR_ALPHA_MIN: f32 = 0.2;
pub const STAR_ALPHA_MAX: f32 = 1.0;
pub const STAR_ALPHA_VEL_MIN: f32 = 0.003; // per 60 fps frame
pub const STAR_ALPHA_VEL_SPAN: f32 = 0.02;
pub const STAR_COLOR: [f32; 3] = [225.0 / 255.0, 234.0 / 255.0, 1.0];

// Hearts
pub const HEART_COUNT_MIN: usize = 10;
pub const HEART_COUNT_MAX: usize = 16;
pub const HEART_COUNT_MIN_REDUCED: usize = 3;
pub const HEART_COUNT_MAX_REDUCED: usize = 5;
pub const HEART_SIZE_MIN: f32 = 8.0;
pub const HEART_SIZE_SPAN: f32 = 10.0;
pub const HEART_RISE_MIN: f32 = 0.25; // px per 60 fps frame
pub const HEART_RISE_SPAN: f32 = 0.55;
pub const HEART_ALPHA_MIN: f32 = 0.25;
pub const HEART_ALPHA_SPAN: f32 = 0.45;
pub const HEART_TOP_MARGIN: f32 = 24.0; // how far above the top edge before wrapping
pub const HEART_SPAWN_DEPTH: f32 = 60.0; // max distance below the bottom edge on respawn
pub const HEART_COLOR: [f32; 3] = [1.0, 0.55, 0.68];

// Frame pacing
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Audio
pub const ENVELOPE_FLOOR: f32 = 0.0001; // exponential ramps cannot reach zero
pub const RUSTLE_SECOND_PULSE_SEC: f64 = 0.055;
pub const CRACK_SECOND_PULSE_SEC: f64 = 0.040;

pub const DEFAULT_SEED: u64 = 42;
