// DOM hooks and presentation values used by the web front-end.

// Element ids
pub const INTRO_ID: &str = "intro";
pub const LOADER_BAR_ID: &str = "loaderBar";
pub const ENVELOPE_ID: &str = "envelopeShell";
pub const SEAL_ID: &str = "seal";
pub const HINT_ID: &str = "hint";
pub const DESK_STAGE_ID: &str = "deskStage";
pub const LETTER_STAGE_ID: &str = "letterStage";
pub const LETTER_ID: &str = "letter";
pub const CLOSE_BUTTON_ID: &str = "closeBtn";
pub const OUTRO_ID: &str = "outro";
pub const REPLAY_BUTTON_ID: &str = "replayBtn";
pub const SUNLIGHT_ID: &str = "sunlight";
pub const STARS_CANVAS_ID: &str = "stars";

// One element per reveal line, in display order
pub const LINE_SELECTOR: &str = ".ink, .signature";

// Presentation flags
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_DRAGGING: &str = "dragging";
pub const CLASS_CRACKED: &str = "cracked";
pub const CLASS_ENVELOPE_OPEN: &str = "envelope-open";
pub const CLASS_FOLDED: &str = "folded";
pub const CLASS_VISIBLE: &str = "visible";

// Sky gradients
pub const SKY_DAY_GRADIENT: &str = "radial-gradient(circle at 70% 25%, rgba(255,236,190,0.55) 0%, rgba(255,214,160,0.28) 30%, rgba(255,196,150,0.12) 65%, rgba(0,0,0,0) 100%)";
pub const SKY_NIGHT_GRADIENT: &str = "radial-gradient(circle at 70% 25%, rgba(170,177,255,0.28) 0%, rgba(69,85,142,0.22) 30%, rgba(16,22,40,0.58) 65%, rgba(8,13,26,0.9) 100%)";

pub const PARTICLES_SHOWN_OPACITY: &str = "0.95";
pub const DESK_HIDDEN_OPACITY: &str = "0";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const VARIANT_ATTRIBUTE: &str = "data-variant";
