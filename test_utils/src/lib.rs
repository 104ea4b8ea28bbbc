//! Utility helpers for tests.
//!
//! Tolerant vector and orientation assertions, plus a headless Bevy `App`
//! carrying the controllers and a manually advanced clock so frame timing is
//! exact.
use std::time::Duration;

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use professor_walk::{ControllerPlugin, PatrolRng};

/// Seed used by [`headless_app`] so patrol loop picks are reproducible.
pub const TEST_SEED: u64 = 0x5EED;

/// Assert that `actual` lies within `tolerance` of `expected`.
///
/// # Panics
/// Panics with both vectors when they are too far apart.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, tolerance: f32) {
    assert!(
        actual.distance(expected) <= tolerance,
        "expected {expected} (±{tolerance}), got {actual}"
    );
}

/// Assert that two rotations describe the same orientation.
///
/// `q` and `-q` are the same orientation, so the comparison ignores sign.
///
/// # Panics
/// Panics with both rotations when they differ by more than `tolerance`.
pub fn assert_same_orientation(actual: Quat, expected: Quat, tolerance: f32) {
    let alignment = actual.normalize().dot(expected.normalize()).abs();
    assert!(
        1.0 - alignment <= tolerance,
        "expected orientation {expected:?}, got {actual:?}"
    );
}

/// Builds an `App` with input resources, a manual clock, a seeded
/// [`PatrolRng`] and [`ControllerPlugin`], without windowing or rendering.
#[must_use]
pub fn headless_app() -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default());
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.init_resource::<AccumulatedMouseMotion>();
    app.init_resource::<AccumulatedMouseScroll>();
    app.insert_resource(PatrolRng::seeded(TEST_SEED));
    app.add_plugins(ControllerPlugin);
    app
}

/// Advances the clock by `seconds`, runs one frame, then clears per-frame
/// input the way the host's input plugin would before the next frame.
pub fn step(app: &mut App, seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
    app.update();

    let world = app.world_mut();
    world.resource_mut::<ButtonInput<KeyCode>>().clear();
    world.resource_mut::<ButtonInput<MouseButton>>().clear();
    world.resource_mut::<AccumulatedMouseMotion>().delta = Vec2::ZERO;
    world.resource_mut::<AccumulatedMouseScroll>().delta = Vec2::ZERO;
}
