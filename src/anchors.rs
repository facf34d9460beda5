//! Tabs and path geometry read from the page, and tab placements written back.

use glam::Vec2;
use orbit_core::{AnchorProvider, TabAnchor, TabPlacement, ViewBox, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{TAB_SELECTOR, TAB_VISIBLE_CLASS};
use crate::dom;

pub struct DomAnchors {
    svg: Option<web::SvgsvgElement>,
    tabs: Vec<TabAnchor>,
    tab_elements: Vec<web::HtmlElement>,
    viewport: Viewport,
}

impl DomAnchors {
    /// Collect every `.globe-tab` under `container`. Tabs without a numeric
    /// `data-lat`/`data-lon` are left alone.
    pub fn collect(container: &web::Element, svg: Option<web::SvgsvgElement>, viewport: Viewport) -> Self {
        let mut tabs = Vec::new();
        let mut tab_elements = Vec::new();
        let found = container
            .query_selector_all(TAB_SELECTOR)
            .map(dom::elements)
            .unwrap_or_default();
        for el in found {
            let (Some(lat), Some(lon)) = (number_attr(&el, "data-lat"), number_attr(&el, "data-lon")) else {
                continue;
            };
            let Ok(html) = el.dyn_into::<web::HtmlElement>() else {
                continue;
            };
            let label = html
                .get_attribute("data-label")
                .or_else(|| html.text_content())
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            tabs.push(TabAnchor {
                label,
                lat_deg: lat,
                lon_deg: lon,
                parent: html.get_attribute("data-parent"),
            });
            tab_elements.push(html);
        }
        log::info!("[anchors] {} tabs", tabs.len());
        Self {
            svg,
            tabs,
            tab_elements,
            viewport,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

fn number_attr(el: &web::Element, name: &str) -> Option<f32> {
    el.get_attribute(name)?
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn view_box(svg: &web::SvgsvgElement) -> Option<ViewBox> {
    let rect = svg.view_box().base_val()?;
    let vb = ViewBox::new(rect.x(), rect.y(), rect.width(), rect.height());
    (!vb.is_empty()).then_some(vb)
}

impl AnchorProvider for DomAnchors {
    fn tabs(&self) -> &[TabAnchor] {
        &self.tabs
    }

    fn path_end(&self, path_id: &str) -> Option<Vec2> {
        let svg = self.svg.as_ref()?;
        let selector = format!("#{}", path_id.trim_start_matches('#'));
        let path = svg
            .query_selector(&selector)
            .ok()
            .flatten()?
            .dyn_into::<web::SvgGeometryElement>()
            .ok()?;
        let length = path.get_total_length();
        let point = path.get_point_at_length(length).ok()?;
        let end = Vec2::new(point.x(), point.y());
        Some(match view_box(svg) {
            Some(vb) => vb.to_viewport(end, self.viewport),
            None => end,
        })
    }

    fn present_tab(&mut self, index: usize, placement: &TabPlacement) {
        let Some(el) = self.tab_elements.get(index) else {
            return;
        };
        let style = el.style();
        let _ = style.set_property("left", &format!("{:.1}px", placement.pos.x));
        let _ = style.set_property("top", &format!("{:.1}px", placement.pos.y));
        let _ = style.set_property("opacity", &format!("{:.3}", placement.opacity.clamp(0.0, 1.0)));
        let _ = el
            .class_list()
            .toggle_with_force(TAB_VISIBLE_CLASS, placement.visible);
    }
}
