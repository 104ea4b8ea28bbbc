//! Key bindings and the additive direction accumulator.
//!
//! Each held direction key contributes a unit vector; pressing adds it and
//! releasing subtracts it, so the accumulated vector is always the sum of the
//! keys currently held regardless of the order they were pressed in.
use bevy::prelude::KeyCode;
use glam::Vec3;

use crate::vector_math::vec_normalize;

/// Arrow keys steering the professor across the ground plane.
pub const MOVE_BINDINGS: [(KeyCode, Vec3); 4] = [
    (KeyCode::ArrowLeft, Vec3::NEG_X),
    (KeyCode::ArrowRight, Vec3::X),
    (KeyCode::ArrowUp, Vec3::NEG_Z),
    (KeyCode::ArrowDown, Vec3::Z),
];

/// WASD keys flying the camera in its local frame.
pub const FLY_BINDINGS: [(KeyCode, Vec3); 4] = [
    (KeyCode::KeyW, Vec3::Y),
    (KeyCode::KeyS, Vec3::NEG_Y),
    (KeyCode::KeyA, Vec3::NEG_X),
    (KeyCode::KeyD, Vec3::X),
];

/// Key that ends the run.
pub const QUIT_KEY: KeyCode = KeyCode::Escape;

/// Sum of unit contributions from the direction keys currently held.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use professor_walk::input::DirectionAccumulator;
///
/// let mut acc = DirectionAccumulator::default();
/// acc.press(Vec3::NEG_X);
/// acc.press(Vec3::X);
/// assert!(acc.is_idle());
/// acc.release(Vec3::NEG_X);
/// assert_eq!(acc.vector(), Vec3::X);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectionAccumulator(Vec3);

impl DirectionAccumulator {
    /// Adds the contribution of a newly pressed key.
    pub fn press(&mut self, unit: Vec3) {
        self.0 += unit;
    }

    /// Removes the contribution of a released key.
    pub fn release(&mut self, unit: Vec3) {
        self.0 -= unit;
    }

    /// The raw accumulated vector.
    #[must_use]
    pub const fn vector(&self) -> Vec3 {
        self.0
    }

    /// The accumulated vector normalised, or zero when idle.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        vec_normalize(self.0)
    }

    /// Whether no net direction is held.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.0 == Vec3::ZERO
    }
}
