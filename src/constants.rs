//! Scene and controller constants shared across systems.
//!
//! Tunable values (speeds, durations, thresholds) have runtime counterparts in
//! [`ControllerSettings`](crate::settings::ControllerSettings); the constants
//! here are their defaults plus the fixed layout of the demo scene.
use glam::Vec3;

/// Seconds a smooth turn takes to complete, shared by both actors.
pub const TURN_DURATION: f32 = 0.3;
/// Walking speed of both actors in world units per second.
pub const WALK_SPEED: f32 = 100.0;
/// Distance gating patrol/chase transitions.
pub const PROXIMITY_THRESHOLD: f32 = 100.0;
/// Free-fly camera speed in world units per second.
pub const FLY_SPEED: f32 = 200.0;
/// Degrees of camera rotation per unit of relative mouse motion.
pub const LOOK_SENSITIVITY: f32 = 1.0;
/// World units the camera dollies per unit of scroll.
pub const DOLLY_SPEED: f32 = 12.0;

/// Direction the professor mesh faces with an identity orientation.
pub const PROFESSOR_FORWARD: Vec3 = Vec3::Z;
/// Direction the ninja mesh faces with an identity orientation.
///
/// The ninja asset is authored facing the opposite way to the professor.
pub const NINJA_FORWARD: Vec3 = Vec3::NEG_Z;

/// Where the professor is spawned.
pub const PROFESSOR_START: Vec3 = Vec3::ZERO;
/// Where the ninja is spawned.
pub const NINJA_START: Vec3 = Vec3::new(300.0, 0.0, 0.0);

/// Corners of the square patrol loop, in walking order.
pub const PATROL_CORNERS: [Vec3; 4] = [
    Vec3::new(400.0, 0.0, 400.0),
    Vec3::new(400.0, 0.0, -400.0),
    Vec3::new(-400.0, 0.0, -400.0),
    Vec3::new(-400.0, 0.0, 400.0),
];

/// Camera start position.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 150.0, 600.0);
/// Point the camera looks at on startup.
pub const CAMERA_FOCUS: Vec3 = Vec3::new(0.0, 100.0, 0.0);

/// Half extent of the ground grid.
pub const GRID_HALF_EXTENT: f32 = 500.0;
/// Spacing between grid lines.
pub const GRID_SPACING: f32 = 50.0;
/// Number of grid lines drawn along each axis.
pub const GRID_LINES: u8 = 21;
