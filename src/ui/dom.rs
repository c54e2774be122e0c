//! DOM subscriber for the force diagram (wasm only)
//!
//! Applies the view data from the parent module; it holds no diagram state.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use super::{
    ACTIVE_CLASS, StatusView, active_buttons, angle_button_selector, force_buttons_selector,
};
use crate::diagram::{
    DiagramObserver, ForceChange, ForceKind, ForceRegistry, InclineIndicator, StatusReport,
    angle_markers,
};
use crate::levels::Level;
use crate::settings::DiagramSettings;

pub const STATUS_LIST_ID: &str = "force-status-list";
pub const DIAGRAM_ID: &str = "diagram";
pub const WORLD_ID: &str = "physics-world";

/// Keeps the status list, angle buttons and incline arc in sync with the diagram
pub struct DomDiagramView {
    document: Document,
    settings: DiagramSettings,
}

impl DomDiagramView {
    pub fn new(document: Document, settings: DiagramSettings) -> Self {
        Self { document, settings }
    }

    /// Mark the button for `angle` active and clear the rest of that force's row
    fn update_angle_buttons(&self, kind: &ForceKind, angle: Option<i32>) -> Result<(), JsValue> {
        for button in query_all(&self.document, &force_buttons_selector(kind))? {
            button.class_list().remove_1(ACTIVE_CLASS)?;
        }
        if let Some(angle) = angle {
            if let Some(button) = self
                .document
                .query_selector(&angle_button_selector(kind, angle))?
            {
                button.class_list().add_1(ACTIVE_CLASS)?;
            }
        }
        Ok(())
    }

    fn refresh_all_buttons(&self, registry: &ForceRegistry) -> Result<(), JsValue> {
        for button in query_all(&self.document, ".angle-btn")? {
            button.class_list().remove_1(ACTIVE_CLASS)?;
        }
        for (kind, angle) in active_buttons(registry) {
            if let Some(button) = self
                .document
                .query_selector(&angle_button_selector(&kind, angle))?
            {
                button.class_list().add_1(ACTIVE_CLASS)?;
            }
        }
        Ok(())
    }

    fn render_status_list(&self, report: &StatusReport) -> Result<(), JsValue> {
        let Some(list) = self.document.get_element_by_id(STATUS_LIST_ID) else {
            return Ok(());
        };
        list.set_inner_html("");

        for (required, status) in &report.entries {
            let view = StatusView::from_status(required, status);

            let item = div(&self.document, "force-status-item")?;
            let indicator = div(&self.document, "status-indicator")?;
            indicator.class_list().add_1(view.indicator_class)?;
            let label = div(&self.document, "status-label")?;
            label.set_text_content(Some(&view.text));

            item.append_child(&indicator)?;
            item.append_child(&label)?;
            list.append_child(&item)?;
        }
        Ok(())
    }

    fn render_incline(&self, level: &Level) -> Result<(), JsValue> {
        let Some(world) = self.document.get_element_by_id(WORLD_ID) else {
            return Ok(());
        };
        for existing in query_all_in(&world, ".incline-angle-indicator")? {
            existing.remove();
        }

        let Some(incline) = level.incline_angle else {
            return Ok(());
        };
        if !self.settings.show_incline_indicator {
            return Ok(());
        }

        let radius = self.settings.incline_arc_radius();
        let indicator = match ramp_foot(&world) {
            Some(vertex) if self.settings.align_incline_indicator => {
                InclineIndicator::aligned(vertex, incline, radius)
            }
            _ => {
                let size = Vec2::new(world.client_width() as f32, world.client_height() as f32);
                InclineIndicator::centered(size, incline, radius)
            }
        };
        draw_incline_indicator(&self.document, &world, &indicator)
    }
}

impl DiagramObserver for DomDiagramView {
    fn force_changed(
        &mut self,
        change: &ForceChange,
        _registry: &ForceRegistry,
        report: &StatusReport,
    ) {
        let result = self
            .update_angle_buttons(&change.kind, change.angle)
            .and_then(|_| self.render_status_list(report));
        if let Err(e) = result {
            log::warn!("Diagram redraw failed: {:?}", e);
        }
    }

    fn level_loaded(&mut self, level: &Level, report: &StatusReport) {
        let result = self
            .refresh_all_buttons(&ForceRegistry::new())
            .and_then(|_| self.render_status_list(report))
            .and_then(|_| self.render_incline(level));
        if let Err(e) = result {
            log::warn!("Level redraw failed: {:?}", e);
        }
    }
}

/// Build the compass ring and reference lines inside `container`
pub fn draw_angle_indicators(
    document: &Document,
    container: &Element,
    settings: &DiagramSettings,
) -> Result<(), JsValue> {
    let ring = div(document, "angle-indicators")?;

    if settings.show_angle_markers {
        let markers = angle_markers(
            settings.marker_radius(),
            settings.marker_step_deg,
            settings.marker_label_offset(),
        );
        for m in &markers {
            let marker = div(document, "angle-marker")?;
            marker.set_attribute("style", &centered_style(m.marker))?;

            let label = div(document, "angle-label")?;
            label.set_text_content(Some(&m.text));
            label.set_attribute("style", &centered_style(m.label))?;

            ring.append_child(&marker)?;
            ring.append_child(&label)?;
        }
    }

    if settings.show_reference_lines {
        let lines = div(document, "reference-lines")?;
        lines.append_child(&div(document, "reference-line horizontal")?)?;
        lines.append_child(&div(document, "reference-line vertical")?)?;
        ring.append_child(&lines)?;
    }

    container.append_child(&ring)?;
    Ok(())
}

/// Build the incline arc, label and reference lines inside `container`
pub fn draw_incline_indicator(
    document: &Document,
    container: &Element,
    indicator: &InclineIndicator,
) -> Result<(), JsValue> {
    let root = div(document, "incline-angle-indicator")?;

    let origin = indicator.arc_origin();
    let size = indicator.arc_size();
    let arc = div(document, "incline-angle-arc")?;
    arc.set_attribute(
        "style",
        &format!(
            "width: {size}px; height: {size}px; left: {}px; top: {}px;",
            origin.x, origin.y
        ),
    )?;

    let label = div(document, "incline-angle-label")?;
    label.set_text_content(Some(&indicator.text));
    label.set_attribute(
        "style",
        &format!("left: {}px; top: {}px;", indicator.label.x, indicator.label.y),
    )?;

    let horizontal = reference_line(
        document,
        indicator,
        "horizontal",
        indicator.horizontal_rotation,
    )?;
    let inclined = reference_line(document, indicator, "inclined", indicator.incline_rotation)?;

    root.append_child(&arc)?;
    root.append_child(&label)?;
    root.append_child(&horizontal)?;
    root.append_child(&inclined)?;
    container.append_child(&root)?;
    Ok(())
}

fn reference_line(
    document: &Document,
    indicator: &InclineIndicator,
    variant: &str,
    rotation: f32,
) -> Result<Element, JsValue> {
    let line = div(document, &format!("incline-reference-line {}", variant))?;
    line.set_attribute(
        "style",
        &format!(
            "width: {}px; left: {}px; top: {}px; transform: rotate({}deg);",
            indicator.line_length(),
            indicator.vertex.x,
            indicator.vertex.y,
            rotation
        ),
    )?;
    Ok(line)
}

/// Ramp foot position published by the world view as `data-ramp-x`/`data-ramp-y`
fn ramp_foot(world: &Element) -> Option<Vec2> {
    let x = world.get_attribute("data-ramp-x")?.parse().ok()?;
    let y = world.get_attribute("data-ramp-y")?.parse().ok()?;
    Some(Vec2::new(x, y))
}

fn centered_style(offset: Vec2) -> String {
    format!(
        "left: calc(50% + {}px); top: calc(50% + {}px);",
        offset.x, offset.y
    )
}

fn div(document: &Document, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_attribute("class", class)?;
    Ok(el)
}

fn collect(list: web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(collect(document.query_selector_all(selector)?))
}

fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(collect(root.query_selector_all(selector)?))
}
