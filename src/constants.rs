// DOM hooks the front-end looks for. Anything missing is skipped.

pub const CONTAINER_SELECTOR: &str = ".hero-canvas";
pub const BLOB_CANVAS_ID: &str = "blobCanvas";
pub const GLOBE_CANVAS_ID: &str = "globeCanvas";
pub const HERO_SVG_SELECTOR: &str = ".hero-svg";
pub const TAB_SELECTOR: &str = ".globe-tab";
pub const TAB_VISIBLE_CLASS: &str = "is-visible";

pub const LEFT_ROW_SELECTOR: &str = "[data-left-row]";
pub const RIGHT_ROW_SELECTOR: &str = "[data-right-row]";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Attached point sizes for markers arriving from the input and output fans
pub const ATTACH_SIZE_INPUT: f32 = 3.0;
pub const ATTACH_SIZE_OUTPUT: f32 = 1.4;

pub const DEFAULT_MOTION_DUR_SECS: f32 = 3.0;
