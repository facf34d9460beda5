// Host-side tests for the startup plan.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod startup {
    include!("../src/startup.rs");
}

use startup::Startup;

#[test]
fn full_motion_runs_everything() {
    assert_eq!(
        Startup::for_motion(false),
        Startup {
            randomize_timings: true,
            wire_markers: true,
            run_loop: true,
        }
    );
}

#[test]
fn reduced_motion_still_randomizes_timings() {
    let plan = Startup::for_motion(true);
    assert!(plan.randomize_timings);
    assert!(!plan.wire_markers);
    assert!(!plan.run_loop);
}
