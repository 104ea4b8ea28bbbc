//! Free-fly camera driven by WASD, right-drag mouse look and scroll dolly.
//!
//! The camera is not constrained to the ground: WASD moves it along its own
//! up and right axes, the mouse rotates it directly with no smoothing, and the
//! scroll wheel pushes it along the direction it is looking.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use crate::input::{DirectionAccumulator, FLY_BINDINGS};
use crate::settings::ControllerSettings;

/// Button that must be held for mouse motion to rotate the camera.
pub const LOOK_BUTTON: MouseButton = MouseButton::Right;

/// Pixels of touchpad scroll treated as one wheel line.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Marker and input state for the free-fly camera.
///
/// # Examples
///
/// Spawning a fly camera without a renderer, as the tests do:
///
/// ```
/// use bevy::prelude::*;
/// use professor_walk::camera::FlyCamera;
///
/// let mut world = World::new();
/// world.spawn((Transform::from_xyz(0.0, 150.0, 600.0), FlyCamera::default()));
/// ```
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct FlyCamera {
    movement: DirectionAccumulator,
}

impl FlyCamera {
    /// Net camera-local movement held on the fly keys.
    #[must_use]
    pub const fn movement(&self) -> Vec3 {
        self.movement.vector()
    }

    /// Records a fly key press or release.
    pub fn steer(&mut self, unit: Vec3, pressed: bool) {
        if pressed {
            self.movement.press(unit);
        } else {
            self.movement.release(unit);
        }
    }
}

/// Camera-local offset for this frame's flight.
///
/// # Examples
/// ```
/// use bevy::prelude::*;
/// use professor_walk::camera::fly_offset;
///
/// let offset = fly_offset(Quat::IDENTITY, Vec3::X, 200.0, 0.5);
/// assert_eq!(offset, Vec3::new(100.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn fly_offset(rotation: Quat, movement: Vec3, speed: f32, delta: f32) -> Vec3 {
    rotation * (movement * speed * delta)
}

/// Rotates `transform` for relative mouse motion `motion`, in degrees scaled
/// by `sensitivity`: horizontal motion yaws about world up, vertical motion
/// pitches about the camera's own right axis.
pub fn apply_mouse_look(transform: &mut Transform, motion: Vec2, sensitivity: f32) {
    transform.rotate_y((-motion.x * sensitivity).to_radians());
    transform.rotate_local_x((-motion.y * sensitivity).to_radians());
}

/// Vertical scroll this frame in wheel lines, whatever unit the device
/// reports.
///
/// # Examples
/// ```
/// use bevy::input::mouse::{AccumulatedMouseScroll, MouseScrollUnit};
/// use bevy::prelude::*;
/// use professor_walk::camera::{scroll_lines, PIXELS_PER_LINE};
///
/// let scroll = AccumulatedMouseScroll {
///     unit: MouseScrollUnit::Pixel,
///     delta: Vec2::new(0.0, 3.0 * PIXELS_PER_LINE),
/// };
/// assert_eq!(scroll_lines(&scroll), 3.0);
/// ```
#[must_use]
pub const fn scroll_lines(scroll: &AccumulatedMouseScroll) -> f32 {
    match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
    }
}

/// Feeds WASD presses and releases into every fly camera.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn fly_camera_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cameras: Query<&mut FlyCamera>,
) {
    for mut camera in &mut cameras {
        for (key, unit) in FLY_BINDINGS {
            if keyboard.just_pressed(key) {
                camera.steer(unit, true);
            }
            if keyboard.just_released(key) {
                camera.steer(unit, false);
            }
        }
    }
}

/// Moves fly cameras along their held directions.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn fly_camera_system(
    time: Res<Time>,
    settings: Res<ControllerSettings>,
    mut cameras: Query<(&FlyCamera, &mut Transform)>,
) {
    let delta = time.delta_secs();
    for (camera, mut transform) in &mut cameras {
        let movement = camera.movement();
        if movement == Vec3::ZERO {
            continue;
        }
        let offset = fly_offset(transform.rotation, movement, settings.fly_speed, delta);
        transform.translation += offset;
    }
}

/// Applies right-drag mouse look and scroll dolly to fly cameras.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn mouse_look_system(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    settings: Res<ControllerSettings>,
    mut cameras: Query<&mut Transform, With<FlyCamera>>,
) {
    let looking = buttons.pressed(LOOK_BUTTON) && motion.delta != Vec2::ZERO;
    let dolly = scroll_lines(&scroll) * settings.dolly_speed;
    if !looking && dolly == 0.0 {
        return;
    }

    for mut transform in &mut cameras {
        if looking {
            apply_mouse_look(&mut transform, motion.delta, settings.look_sensitivity);
        }
        if dolly != 0.0 {
            let forward = transform.forward();
            transform.translation += forward * dolly;
        }
    }
}
