//! Page-facing view data
//!
//! Turns diagram state into label text, CSS classes and selectors. The DOM
//! subscriber that applies them only exists on wasm.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use crate::diagram::{ForceKind, ForceRegistry, ForceStatus};
use crate::levels::RequiredForce;

/// Class toggled on the selected angle button
pub const ACTIVE_CLASS: &str = "active";

/// One row of the force status list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Class for the status indicator dot
    pub indicator_class: &'static str,
    pub text: String,
}

impl StatusView {
    pub fn from_status(required: &RequiredForce, status: &ForceStatus) -> Self {
        let name = required.kind.display_name();
        match status {
            ForceStatus::Missing => Self {
                indicator_class: "status-missing",
                text: format!("{}: Missing", name),
            },
            ForceStatus::Incorrect { actual, expected } => Self {
                indicator_class: "status-incorrect",
                text: format!(
                    "{}: Incorrect angle ({}° instead of {}°)",
                    name,
                    format_angle(*actual),
                    expected
                ),
            },
            ForceStatus::Correct => Self {
                indicator_class: "status-correct",
                text: format!("{}: Correct!", name),
            },
        }
    }
}

/// Unreadable angles show up as `NaN`, as the input box would
fn format_angle(angle: Option<i32>) -> String {
    match angle {
        Some(a) => a.to_string(),
        None => "NaN".to_string(),
    }
}

/// Selector for every angle button of one force
pub fn force_buttons_selector(kind: &ForceKind) -> String {
    format!(".angle-btn[data-force=\"{}\"]", kind.as_str())
}

/// Selector for the button of one force at one bearing
pub fn angle_button_selector(kind: &ForceKind, angle: i32) -> String {
    format!(
        ".angle-btn[data-force=\"{}\"][data-angle=\"{}\"]",
        kind.as_str(),
        angle
    )
}

/// Buttons that should carry the active class for the current registry
pub fn active_buttons(registry: &ForceRegistry) -> Vec<(ForceKind, i32)> {
    registry
        .iter()
        .filter_map(|f| f.angle.map(|a| (f.kind.clone(), a)))
        .collect()
}
