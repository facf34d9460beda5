//! Labelled anchors ("tabs") that ride on the sphere, and the short curves
//! linking a sub-tab to its parent.

use fnv::FnvHashMap;
use glam::Vec2;

use crate::constants::{
    TAB_LINK_ALPHA_BASE, TAB_LINK_ALPHA_SPAN, TAB_LINK_LIFT, TAB_OPACITY_BASE, TAB_OPACITY_SPAN,
};
use crate::projection::{Projector, QuadCurve};

/// A tab pinned to the sphere at fixed spherical coordinates (degrees).
#[derive(Clone, Debug, PartialEq)]
pub struct TabAnchor {
    pub label: String,
    pub lat_deg: f32,
    pub lon_deg: f32,
    /// Label of the tab this one hangs off, for sub-tabs.
    pub parent: Option<String>,
}

/// Read side of the page: where tabs sit on the sphere and where animated
/// paths end on screen.
pub trait AnchorProvider {
    fn tabs(&self) -> &[TabAnchor];

    /// End point of the path with this id, in viewport pixels.
    fn path_end(&self, path_id: &str) -> Option<Vec2>;

    /// Write a tab's projected position back to the page.
    fn present_tab(&mut self, _index: usize, _placement: &TabPlacement) {}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabPlacement {
    /// Absolute viewport position.
    pub pos: Vec2,
    pub z: f32,
    pub depth: f32,
    pub visible: bool,
    pub opacity: f32,
}

pub fn place_tab(tab: &TabAnchor, center: Vec2, rotation: f32, projector: &Projector) -> TabPlacement {
    let p = projector.project_lat_lon(
        tab.lat_deg.to_radians(),
        tab.lon_deg.to_radians(),
        rotation,
    );
    let depth = projector.depth(&p);
    let visible = p.is_front_facing();
    TabPlacement {
        pos: center + p.xy(),
        z: p.z,
        depth,
        visible,
        opacity: if visible {
            TAB_OPACITY_BASE + depth * TAB_OPACITY_SPAN
        } else {
            0.0
        },
    }
}

pub fn place_tabs(
    tabs: &[TabAnchor],
    center: Vec2,
    rotation: f32,
    projector: &Projector,
) -> Vec<TabPlacement> {
    tabs.iter()
        .map(|t| place_tab(t, center, rotation, projector))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabLink {
    pub curve: QuadCurve,
    pub alpha: f32,
}

/// Curves from each visible parent to its visible sub-tabs. `placements`
/// must line up with `tabs`.
pub fn tab_links(tabs: &[TabAnchor], placements: &[TabPlacement]) -> Vec<TabLink> {
    let by_label: FnvHashMap<&str, &TabPlacement> = tabs
        .iter()
        .zip(placements)
        .map(|(t, p)| (t.label.as_str(), p))
        .collect();
    tabs.iter()
        .zip(placements)
        .filter_map(|(tab, child)| {
            let parent = by_label.get(tab.parent.as_deref()?)?;
            if !parent.visible || !child.visible {
                return None;
            }
            let mid = (parent.pos + child.pos) / 2.0 - Vec2::new(0.0, TAB_LINK_LIFT);
            Some(TabLink {
                curve: QuadCurve::new(parent.pos, mid, child.pos),
                alpha: TAB_LINK_ALPHA_BASE + parent.depth.min(child.depth) * TAB_LINK_ALPHA_SPAN,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(label: &str, lon: f32, parent: Option<&str>) -> TabAnchor {
        TabAnchor {
            label: label.into(),
            lat_deg: 0.0,
            lon_deg: lon,
            parent: parent.map(Into::into),
        }
    }

    #[test]
    fn tabs_facing_away_are_hidden() {
        let proj = Projector::new(100.0);
        let front = place_tab(&tab("a", 90.0, None), Vec2::ZERO, 0.0, &proj);
        let back = place_tab(&tab("b", -90.0, None), Vec2::ZERO, 0.0, &proj);
        assert!(front.visible);
        assert!((front.opacity - 1.1).abs() < 1e-4);
        assert!(!back.visible);
        assert_eq!(back.opacity, 0.0);
    }

    #[test]
    fn links_need_both_ends_visible() {
        let proj = Projector::new(100.0);
        let tabs = vec![
            tab("root", 80.0, None),
            tab("near", 100.0, Some("root")),
            tab("far", -90.0, Some("root")),
            tab("orphan", 90.0, Some("missing")),
        ];
        let placed = place_tabs(&tabs, Vec2::new(200.0, 200.0), 0.0, &proj);
        let links = tab_links(&tabs, &placed);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].curve.start, placed[0].pos);
        assert_eq!(links[0].curve.end, placed[1].pos);
        assert!(links[0].curve.control.y < (placed[0].pos.y + placed[1].pos.y) / 2.0);
    }
}
