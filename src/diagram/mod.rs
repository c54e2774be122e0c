//! Free-body diagram model
//!
//! Everything the widget decides lives here, with no DOM dependencies:
//! - which forces the user has placed and at what bearing
//! - how those compare with the level's answer
//! - where markers and incline arcs go on screen

pub mod force;
pub mod geometry;
pub mod registry;
pub mod session;
pub mod status;

pub use force::{AppliedForce, ForceKind, parse_angle};
pub use geometry::{AngleMarker, InclineIndicator, angle_markers};
pub use registry::{ForceChange, ForceRegistry};
pub use session::{DiagramObserver, ForceDiagram};
pub use status::{ForceStatus, StatusCounts, StatusReport, evaluate};
