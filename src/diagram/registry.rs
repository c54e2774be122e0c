//! Applied force registry
//!
//! One entry per force kind, kept in the order the user first placed them.

use serde::{Deserialize, Serialize};

use super::force::{AppliedForce, ForceKind, parse_angle};
use crate::consts::GRAVITY_BEARING;

/// What a single angle assignment did to the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForceChange {
    pub kind: ForceKind,
    /// Angle now stored for `kind`
    pub angle: Option<i32>,
    /// True when this assignment added the entry
    pub created: bool,
}

/// Ordered set of applied forces, keyed by kind
///
/// Serialized as a plain list. Loading replays each entry through the same
/// write path as `set_angle`, so duplicates collapse and gravity stays at 180.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<AppliedForce>", into = "Vec<AppliedForce>")]
pub struct ForceRegistry {
    forces: Vec<AppliedForce>,
}

impl From<Vec<AppliedForce>> for ForceRegistry {
    fn from(forces: Vec<AppliedForce>) -> Self {
        let mut registry = Self::new();
        for force in forces {
            registry.store(force.kind.clone(), force.angle);
            if let Some(entry) = registry.forces.iter_mut().find(|f| f.kind == force.kind) {
                entry.magnitude = force.magnitude;
            }
        }
        registry
    }
}

impl From<ForceRegistry> for Vec<AppliedForce> {
    fn from(registry: ForceRegistry) -> Self {
        registry.forces
    }
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self { forces: Vec::new() }
    }

    /// Assign a bearing to a force, adding the force if it is not placed yet.
    ///
    /// Gravity is pinned to 180° whatever the caller asks for.
    pub fn set_angle(&mut self, kind: ForceKind, angle: i32) -> ForceChange {
        self.store(kind, Some(angle))
    }

    /// Like [`set_angle`](Self::set_angle), but reads the angle from raw input
    /// text. Text that holds no number stores `None`.
    pub fn set_angle_text(&mut self, kind: ForceKind, text: &str) -> ForceChange {
        let angle = if kind == ForceKind::Gravity {
            Some(GRAVITY_BEARING)
        } else {
            let parsed = parse_angle(text);
            if parsed.is_none() {
                log::warn!("Unreadable angle {:?} for {}", text, kind);
            }
            parsed
        };
        self.store(kind, angle)
    }

    fn store(&mut self, kind: ForceKind, angle: Option<i32>) -> ForceChange {
        let angle = if kind == ForceKind::Gravity {
            Some(GRAVITY_BEARING)
        } else {
            angle
        };

        if !kind.is_known() {
            log::warn!("Placing unrecognized force kind {:?}", kind.as_str());
        }

        let created = match self.forces.iter_mut().find(|f| f.kind == kind) {
            Some(force) => {
                force.angle = angle;
                false
            }
            None => {
                self.forces.push(AppliedForce::new(kind.clone(), angle));
                true
            }
        };

        log::debug!("Set {} to {:?} (created: {})", kind, angle, created);

        ForceChange {
            kind,
            angle,
            created,
        }
    }

    pub fn get(&self, kind: &ForceKind) -> Option<&AppliedForce> {
        self.forces.iter().find(|f| &f.kind == kind)
    }

    /// Stored angle for `kind`; `None` if the force is absent or unreadable
    pub fn angle_of(&self, kind: &ForceKind) -> Option<i32> {
        self.get(kind).and_then(|f| f.angle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppliedForce> {
        self.forces.iter()
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    /// Remove every force (level restart)
    pub fn clear(&mut self) {
        self.forces.clear();
    }
}
