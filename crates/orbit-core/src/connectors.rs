//! Connector paths that braid a fan of labelled rows into one convergence
//! point (or fan one point back out into rows).
//!
//! Each row gets a single quadratic curve. The control point is pulled 35% of
//! the way from the row towards the convergence height and then pushed away
//! from the median row by `offset * spacing * taper`, where `offset` runs from
//! -1 (first row) to +1 (last row). That bow keeps neighbouring curves from
//! crossing.

use std::fmt::Write as _;

use glam::Vec2;
use rand::Rng;

use crate::config::{Layout, Viewport};
use crate::constants::{
    CONNECTOR_CONTROL_X_RATIO, CONNECTOR_PULL, CONNECTOR_SILHOUETTE_INSET, CONNECTOR_TAPER,
    LEFT_CONVERGE_X_FALLBACK, LEFT_ROWS_START_X, RIGHT_CONVERGE_X_FALLBACK, RIGHT_ROWS_END_X,
};

/// Receives SVG path data by element id. Returns `false` when no element
/// with that id exists.
pub trait PathSink {
    fn set_path(&mut self, id: &str, d: &str) -> bool;
}

/// Finite row heights, ascending.
pub fn sorted_rows<I: IntoIterator<Item = f32>>(values: I) -> Vec<f32> {
    let mut rows: Vec<f32> = values.into_iter().filter(|v| v.is_finite()).collect();
    rows.sort_by(f32::total_cmp);
    rows
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowFan {
    /// Row heights, ascending.
    pub rows: Vec<f32>,
    pub start_x: f32,
    pub end_x: f32,
    /// Curves leave the convergence point and end on the rows when set.
    pub converge_at_start: bool,
    pub taper: f32,
}

impl RowFan {
    pub fn new(rows: Vec<f32>, start_x: f32, end_x: f32, converge_at_start: bool) -> Self {
        Self {
            rows,
            start_x,
            end_x,
            converge_at_start,
            taper: CONNECTOR_TAPER,
        }
    }

    #[must_use]
    pub fn with_taper(mut self, taper: f32) -> Self {
        self.taper = taper;
        self
    }

    pub fn converge_y(&self) -> Option<f32> {
        if self.rows.is_empty() {
            return None;
        }
        Some(self.rows.iter().sum::<f32>() / self.rows.len() as f32)
    }

    /// Distance between the first two rows; zero for a single row.
    pub fn spacing(&self) -> f32 {
        match self.rows.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    #[inline]
    pub fn control_x(&self) -> f32 {
        self.start_x + (self.end_x - self.start_x) * CONNECTOR_CONTROL_X_RATIO
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorPath {
    pub index: usize,
    /// Signed distance from the median row, `-1..=1`.
    pub offset: f32,
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl ConnectorPath {
    /// SVG path data: `M x y Q cx cy ex ey`.
    pub fn d(&self) -> String {
        format!(
            "M {} {} Q {} {} {} {}",
            self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectorSet {
    pub converge_y: f32,
    pub paths: Vec<ConnectorPath>,
}

impl ConnectorSet {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All path strings joined into one decorative overlay path.
    pub fn guide(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.paths.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}", p.d());
        }
        out
    }
}

/// Build one curve per row. No rows, no paths.
pub fn synthesize(fan: &RowFan) -> ConnectorSet {
    let Some(converge_y) = fan.converge_y() else {
        return ConnectorSet::default();
    };
    let mid = (fan.rows.len() as f32 - 1.0) / 2.0;
    let spacing = fan.spacing();
    let control_x = fan.control_x();
    let paths = fan
        .rows
        .iter()
        .enumerate()
        .map(|(index, &row_y)| {
            let offset = if mid == 0.0 {
                0.0
            } else {
                (index as f32 - mid) / mid
            };
            let base = if fan.converge_at_start {
                converge_y + (row_y - converge_y) * CONNECTOR_PULL
            } else {
                row_y + (converge_y - row_y) * CONNECTOR_PULL
            };
            let control = Vec2::new(control_x, base - offset * spacing * fan.taper);
            let (start, end) = if fan.converge_at_start {
                (
                    Vec2::new(fan.start_x, converge_y),
                    Vec2::new(fan.end_x, row_y),
                )
            } else {
                (
                    Vec2::new(fan.start_x, row_y),
                    Vec2::new(fan.end_x, converge_y),
                )
            };
            ConnectorPath {
                index,
                offset,
                start,
                control,
                end,
            }
        })
        .collect();
    log::debug!(
        "[connectors] {} rows converge at y={:.1}",
        fan.rows.len(),
        converge_y
    );
    ConnectorSet { converge_y, paths }
}

/// Where one fan's paths live in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathGroup {
    pub prefix: &'static str,
    pub guide_id: &'static str,
}

pub const INPUT_PATHS: PathGroup = PathGroup {
    prefix: "left-path",
    guide_id: "left-guide",
};

pub const OUTPUT_PATHS: PathGroup = PathGroup {
    prefix: "output-path",
    guide_id: "right-guide",
};

impl PathGroup {
    pub fn path_id(&self, index: usize) -> String {
        format!("{}-{}", self.prefix, index)
    }
}

/// Write every path plus the guide. Returns how many ids were found.
pub fn write_connectors<S: PathSink + ?Sized>(sink: &mut S, group: PathGroup, set: &ConnectorSet) -> usize {
    if set.is_empty() {
        return 0;
    }
    let mut written = 0;
    for p in &set.paths {
        let id = group.path_id(p.index);
        if sink.set_path(&id, &p.d()) {
            written += 1;
        } else {
            log::debug!("[connectors] missing #{}", id);
        }
    }
    if sink.set_path(group.guide_id, &set.guide()) {
        written += 1;
    }
    written
}

/// SVG viewBox rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Map a point in viewBox units onto a viewport of the given size.
    pub fn to_viewport(&self, point: Vec2, viewport: Viewport) -> Vec2 {
        if self.is_empty() {
            return point;
        }
        Vec2::new(
            (point.x - self.x) / self.width * viewport.width,
            (point.y - self.y) / self.height * viewport.height,
        )
    }
}

/// Left and right convergence x in viewBox units: just outside the sphere's
/// silhouette on either side.
pub fn converge_xs(viewport: Viewport, viewbox: ViewBox, layout: &Layout) -> (f32, f32) {
    if viewport.is_empty() || viewbox.is_empty() {
        return (LEFT_CONVERGE_X_FALLBACK, RIGHT_CONVERGE_X_FALLBACK);
    }
    let scale_x = viewbox.width / viewport.width;
    let scale_y = viewbox.height / viewport.height;
    let scale = scale_x.min(scale_y);
    let center_x = viewbox.x + viewport.width * layout.center_x_ratio * scale_x;
    let radius = viewport.min_dim() * layout.radius_ratio * scale;
    let reach = radius * CONNECTOR_SILHOUETTE_INSET;
    (center_x - reach, center_x + reach)
}

/// The two fans of the hero diagram: input rows converging into the left
/// of the sphere, and output rows fanning out of its right.
pub fn hero_fans(
    left_rows: Vec<f32>,
    right_rows: Vec<f32>,
    viewport: Viewport,
    viewbox: ViewBox,
    layout: &Layout,
) -> (RowFan, RowFan) {
    let (left_x, right_x) = converge_xs(viewport, viewbox, layout);
    (
        RowFan::new(left_rows, LEFT_ROWS_START_X, left_x, false),
        RowFan::new(right_rows, right_x, RIGHT_ROWS_END_X, true),
    )
}

/// Parse an SMIL duration such as `"3s"` or `"2.5s"`.
pub fn parse_duration_secs(value: &str) -> Option<f32> {
    value
        .trim()
        .trim_end_matches('s')
        .parse::<f32>()
        .ok()
        .filter(|d| d.is_finite() && *d > 0.0)
}

/// Random `begin` attribute within one cycle, so markers don't move in step.
pub fn begin_offset<R: Rng + ?Sized>(duration_secs: f32, rng: &mut R) -> String {
    format!("{:.2}s", rng.gen::<f32>() * duration_secs.max(0.0))
}
