// Default page contract: element ids, class names and observer tuning.

// Controls for the button-triggered animation
pub const TRIGGER_ID: &str = "animator";
pub const RESET_ID: &str = "reset-animation";

// Class toggled on containers and observed elements; styling keys off it
pub const MARKER_CLASS: &str = "active";
// Class selecting which elements join the observed set at setup
pub const OBSERVABLE_CLASS: &str = "observable";

// Observer tuning
pub const ROOT_MARGIN: &str = "0px"; // exact viewport bounds
pub const THRESHOLD: f64 = 0.1; // fraction visible before counting as intersecting

// Inline opacity values written by the presentation layer
pub const OPACITY_OPAQUE: &str = "1";
pub const OPACITY_TRANSPARENT: &str = "0";

// Presence of this attribute on <body> raises the console log level to debug
pub const DEBUG_DATA_ATTR: &str = "data-reveal-debug";
