// Tuning constants for the orbital scene. Units are CSS pixels and
// milliseconds unless stated otherwise.

// Projection
pub const DEPTH_SCALE_BASE: f32 = 0.8; // scale of a point on the z = 0 plane
pub const DEPTH_SCALE_DIVISOR: f32 = 3.0; // scale = base + z / (divisor * R)

// Blob field
pub const BLOB_COUNT: usize = 5;
pub const BLOB_RADIUS_PULSE: f32 = 30.0;
pub const BLOB_PULSE_FREQ_RATIO: f64 = 1.2; // radius pulses 1.2x faster than the drift
pub const BLOB_POINTER_PARALLAX: f32 = 0.4;
pub const BLOB_BLUR_PX: f32 = 36.0;

// Sphere
pub const SPHERE_POINTER_PARALLAX: f32 = 0.6;
pub const CLOUD_POINT_DIVISOR: f32 = 6.0; // one cloud point per 6px of width
pub const EDGE_ALPHA_BASE: f32 = 0.18;
pub const EDGE_ALPHA_SPAN: f32 = 0.5;
pub const POINT_ALPHA_SPAN: f32 = 0.6;

// Particle streams
pub const STREAM_PARTICLE_DIVISOR: f32 = 12.0; // one particle per 12px of width
pub const STREAM_FRAME_MS: f32 = 16.0; // speeds are expressed per 16ms frame
pub const STREAM_OPACITY_BASE: f32 = 0.25;
pub const STREAM_OPACITY_SPAN: f32 = 0.65;
pub const STREAM_GLOW: f32 = 12.0;

// Attached points
pub const ATTACHED_LIFE_MS: f64 = 3200.0;
pub const ATTACHED_PEAK_ALPHA: f32 = 0.7;

// Tabs
pub const TAB_OPACITY_BASE: f32 = 0.2;
pub const TAB_OPACITY_SPAN: f32 = 0.9;
pub const TAB_LINK_LIFT: f32 = 12.0;
pub const TAB_LINK_ALPHA_BASE: f32 = 0.35;
pub const TAB_LINK_ALPHA_SPAN: f32 = 0.45;

// Connector paths
pub const CONNECTOR_CONTROL_X_RATIO: f32 = 0.45;
pub const CONNECTOR_PULL: f32 = 0.35; // control point pulled 35% toward convergence
pub const CONNECTOR_TAPER: f32 = 0.6;
pub const CONNECTOR_SILHOUETTE_INSET: f32 = 1.05;
pub const LEFT_ROWS_START_X: f32 = 200.0;
pub const RIGHT_ROWS_END_X: f32 = 700.0;
pub const LEFT_CONVERGE_X_FALLBACK: f32 = 290.0;
pub const RIGHT_CONVERGE_X_FALLBACK: f32 = 610.0;

// Pointer
pub const POINTER_SMOOTHING: f32 = 0.06;
pub const POINTER_RANGE_X: f32 = 40.0; // maps to +-20
pub const POINTER_RANGE_Y: f32 = 30.0; // maps to +-15

// Scheduler
pub const STALL_GUARD_MS: f64 = 80.0;
