//! Scene state and the per-frame update/draw sequence.
//!
//! All viewport-derived state lives in one [`Scene`], rebuilt as a whole on
//! resize. [`Engine`] owns it together with the layout, the preset, the frame
//! clock and the RNG, and runs one tick at a time:
//! pointer smoothing, then particle update, then drawing.

use std::f64::consts::TAU;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::attached::AttachedPoints;
use crate::blobs::BlobField;
use crate::config::{Layout, Preset, Viewport};
use crate::constants::{SPHERE_POINTER_PARALLAX, STALL_GUARD_MS};
use crate::pointer::PointerSmoother;
use crate::projection::Projector;
use crate::render::{self, Painter};
use crate::shape::PointSet;
use crate::streams::{stream_guides, StreamPool};
use crate::tabs::{place_tabs, tab_links, AnchorProvider};

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub viewport: Viewport,
    pub blobs: BlobField,
    pub points: PointSet,
    pub streams: StreamPool,
    pub attached: AttachedPoints,
    pub pointer: PointerSmoother,
}

/// Outcome of one scheduler tick. The host reschedules either way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// The gap since the previous tick was too long (tab switch, debugger);
    /// nothing was updated or drawn.
    Stalled { delta: f64 },
    Rendered { delta: f64 },
}

impl Tick {
    pub fn rendered(&self) -> bool {
        matches!(self, Tick::Rendered { .. })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_time: f64,
}

impl FrameClock {
    pub fn new(start: f64) -> Self {
        Self { last_time: start }
    }

    /// Record `time` and report the delta since the previous call. Deltas
    /// above the stall guard come back as `Stalled`.
    pub fn tick(&mut self, time: f64) -> Tick {
        let delta = time - self.last_time;
        self.last_time = time;
        if delta > STALL_GUARD_MS {
            Tick::Stalled { delta }
        } else {
            Tick::Rendered { delta }
        }
    }
}

pub struct Engine {
    pub layout: Layout,
    pub preset: Preset,
    scene: Scene,
    clock: FrameClock,
    rng: StdRng,
}

impl Engine {
    pub fn new(viewport: Viewport, layout: Layout, preset: Preset, seed: u64) -> Self {
        Self::with_rng(viewport, layout, preset, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(viewport: Viewport, layout: Layout, preset: Preset, rng: StdRng) -> Self {
        let mut engine = Self {
            layout,
            preset,
            scene: Scene::default(),
            clock: FrameClock::default(),
            rng,
        };
        engine.rebuild(viewport, true);
        engine
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn pointer_mut(&mut self) -> &mut PointerSmoother {
        &mut self.scene.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.scene.viewport
    }

    /// Re-derive everything that depends on the viewport. Pointer state and
    /// live attached points carry over.
    pub fn resize(&mut self, viewport: Viewport) {
        let rebuild_points = self.preset.kind.depends_on_viewport();
        self.rebuild(viewport, rebuild_points);
    }

    fn rebuild(&mut self, viewport: Viewport, rebuild_points: bool) {
        self.scene.viewport = viewport;
        self.scene.blobs = BlobField::new(&mut self.rng);
        if rebuild_points {
            self.scene.points = self.preset.kind.strategy().build(viewport, &mut self.rng);
        }
        self.scene.streams = StreamPool::new(viewport, &self.layout, &mut self.rng);
        log::debug!(
            "[scene] {}x{} points={} edges={} streams={}",
            viewport.width,
            viewport.height,
            self.scene.points.points.len(),
            self.scene.points.edges.len(),
            self.scene.streams.particles.len()
        );
    }

    pub fn projector(&self) -> Projector {
        Projector::for_layout(self.scene.viewport, &self.layout)
    }

    /// Sphere center on screen, shifted by the smoothed pointer.
    pub fn center(&self) -> Vec2 {
        let vp = self.scene.viewport;
        Vec2::new(
            vp.width * self.layout.center_x_ratio,
            vp.height * self.layout.center_y_ratio,
        ) + self.scene.pointer.offset * SPHERE_POINTER_PARALLAX
    }

    /// Sphere rotation for a frame timestamp, reduced to one turn.
    pub fn rotation(&self, time: f64) -> f32 {
        (-time * self.preset.rotation_speed).rem_euclid(TAU) as f32
    }

    pub fn toggle_points(&mut self) -> bool {
        self.layout.show_points = !self.layout.show_points;
        self.layout.show_points
    }

    pub fn toggle_edges(&mut self) -> bool {
        self.layout.show_edges = !self.layout.show_edges;
        self.layout.show_edges
    }

    /// Pin a fading point where the path `path_id` ends. Returns `false`
    /// when the path can't be found.
    pub fn spawn_attached<A: AnchorProvider + ?Sized>(
        &mut self,
        anchors: &A,
        path_id: &str,
        size: f32,
        now: f64,
    ) -> bool {
        let Some(end) = anchors.path_end(path_id) else {
            log::debug!("[attached] no path #{}", path_id);
            return false;
        };
        let center = self.center();
        let projector = self.projector();
        self.scene.attached.spawn(end, center, &projector, size, now);
        true
    }

    /// One scheduler tick. `time` is the host's frame timestamp in ms.
    pub fn frame<B, S, A>(&mut self, time: f64, blob_layer: &mut B, sphere_layer: &mut S, anchors: &mut A) -> Tick
    where
        B: Painter + ?Sized,
        S: Painter + ?Sized,
        A: AnchorProvider + ?Sized,
    {
        let tick = self.clock.tick(time);
        let Tick::Rendered { delta } = tick else {
            return tick;
        };
        self.scene.pointer.step();
        if self.layout.enable_streams {
            self.scene
                .streams
                .advance(delta as f32, self.scene.viewport, &self.layout, &mut self.rng);
        }
        self.draw(time, blob_layer, sphere_layer, anchors);
        tick
    }

    /// Draw a single frame without advancing anything; used when the host
    /// asks for reduced motion.
    pub fn render_static<B, S, A>(&mut self, time: f64, blob_layer: &mut B, sphere_layer: &mut S, anchors: &mut A)
    where
        B: Painter + ?Sized,
        S: Painter + ?Sized,
        A: AnchorProvider + ?Sized,
    {
        self.clock = FrameClock::new(time);
        self.draw(time, blob_layer, sphere_layer, anchors);
    }

    fn draw<B, S, A>(&mut self, time: f64, blob_layer: &mut B, sphere_layer: &mut S, anchors: &mut A)
    where
        B: Painter + ?Sized,
        S: Painter + ?Sized,
        A: AnchorProvider + ?Sized,
    {
        let vp = self.scene.viewport;
        let frames = self.scene.blobs.frames(time, vp, self.scene.pointer.offset);
        render::draw_blobs(blob_layer, vp, &frames);
        self.draw_sphere(time, sphere_layer, anchors);
    }

    fn draw_sphere<S, A>(&mut self, time: f64, p: &mut S, anchors: &mut A)
    where
        S: Painter + ?Sized,
        A: AnchorProvider + ?Sized,
    {
        let vp = self.scene.viewport;
        let rotation = self.rotation(time);
        let center = self.center();
        let projector = self.projector();

        p.clear(vp);
        p.set_additive(true);
        if self.layout.enable_streams && !self.scene.streams.is_empty() {
            render::draw_streams(p, &stream_guides(center, vp), &self.scene.streams);
        }
        if self.layout.show_outline {
            render::draw_outline(p, center, &projector);
        }
        if self.layout.show_edges {
            render::draw_edges(p, &self.scene.points, center, rotation, &projector);
        }
        if self.layout.show_points {
            render::draw_points(
                p,
                &self.scene.points,
                center,
                rotation,
                &projector,
                self.preset.point_alpha_floor,
                self.preset.point_glow,
            );
        }
        p.set_additive(false);

        let sprites = self.scene.attached.render_set(time, rotation, &projector);
        render::draw_attached(p, center, &sprites);

        let tabs = anchors.tabs().to_vec();
        let placements = place_tabs(&tabs, center, rotation, &projector);
        for (i, placement) in placements.iter().enumerate() {
            anchors.present_tab(i, placement);
        }
        render::draw_tab_links(p, &tab_links(&tabs, &placements));
    }
}
