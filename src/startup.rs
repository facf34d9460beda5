/// What `init` sets up once the page elements are found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Startup {
    /// Spread marker start times over their cycle.
    pub randomize_timings: bool,
    /// Spawn attached points when a marker finishes a lap.
    pub wire_markers: bool,
    /// Run the animation loop; otherwise draw one still frame.
    pub run_loop: bool,
}

impl Startup {
    pub fn for_motion(reduced_motion: bool) -> Self {
        Self {
            randomize_timings: true,
            wire_markers: !reduced_motion,
            run_loop: !reduced_motion,
        }
    }
}
