/// Page-effect tuning constants.
///
/// These constants express intended behavior (e.g., reveal thresholds,
/// transition timing) and keep magic numbers out of the code.
// Reveal-on-scroll: how far above the viewport bottom an element's top must
// rise before it activates (px)
pub const REVEAL_POINT_PX: f64 = 100.0;

// Parallax fallback when an element carries no data-speed
pub const PARALLAX_DEFAULT_SPEED: f64 = 0.5;

// Pill navigation hover animation
pub const PILL_HOVER_SCALE: f64 = 1.2;
pub const PILL_LABEL_LIFT_PX: f64 = 8.0; // resting label rises pill height + this
pub const PILL_HOVER_LABEL_DROP_PX: f64 = 100.0; // hover label parks pill height + this below
pub const PILL_HOVER_ENTER_MS: u32 = 500;
pub const PILL_HOVER_LEAVE_MS: u32 = 400;
pub const PILL_MENU_MS: u32 = 300;
pub const PILL_LOGO_SPIN_MS: u32 = 600;
pub const PILL_LOAD_MS: u32 = 600;
pub const PILL_LOAD_STAGGER_MS: u32 = 200;

// CSS timing functions standing in for the tween library's eases
pub const EASE_OUT_CUBIC: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";
pub const EASE_IN_CUBIC: &str = "cubic-bezier(0.55, 0.055, 0.675, 0.19)";
pub const EASE_STANDARD: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

// Pill navigation default palette
pub const PILL_BASE_COLOR: &str = "#FAFAF8";
pub const PILL_BG_COLOR: &str = "#4A3828";
pub const PILL_TEXT_COLOR: &str = "#FAFAF8";
pub const PILL_HOVER_TEXT_COLOR: &str = "#FAFAF8";

// Split-text defaults
pub const SPLIT_DELAY_MS: u32 = 50;
pub const SPLIT_DURATION_MS: u32 = 800;
pub const SPLIT_FROM_Y_PX: f64 = 40.0;
pub const SPLIT_OBSERVER_THRESHOLD: f64 = 0.1;
pub const SPLIT_OBSERVER_MARGIN: &str = "-100px";
