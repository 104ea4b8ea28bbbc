//! Behavioural tests for the free-fly camera using rust-rspec.
//!
//! Verifies WASD flight in the camera's own frame, right-drag mouse look and
//! scroll dolly. Every scenario starts from a fresh scene.

#[path = "support/controller_fixture.rs"]
mod controller_fixture;

use bevy::prelude::*;
use controller_fixture::ControllerFixture;
use professor_walk::camera::PIXELS_PER_LINE;
use professor_walk::{ControllerSettings, CAMERA_FOCUS, CAMERA_START};
use rspec::block::Context as Scenario;
use test_utils::{assert_same_orientation, assert_vec3_near};

fn start() -> Transform {
    Transform::from_translation(CAMERA_START).looking_at(CAMERA_FOCUS, Vec3::Y)
}

fn fly_up_for_a_second(state: &mut ControllerFixture) {
    state.reset();
    state.press_key(KeyCode::KeyW);
    state.tick_for(1.0);
}

#[test]
fn camera_flies_and_looks_around() {
    let settings = ControllerSettings::default();
    let fly_speed = settings.fly_speed;
    let dolly_speed = settings.dolly_speed;

    ControllerFixture::verify(&rspec::given(
        "a camera looking at the scene",
        ControllerFixture::bootstrap(),
        move |scenario: &mut Scenario<ControllerFixture>| {
            scenario.when("W is held for one second", move |ctx| {
                ctx.before_each(fly_up_for_a_second);

                ctx.then("the camera rises along its own up axis", move |state| {
                    let expected = CAMERA_START + start().rotation * Vec3::Y * fly_speed;
                    assert_vec3_near(state.camera().translation, expected, 1e-2);
                });
            });

            scenario.when("W is released after a second of flight", |ctx| {
                ctx.before_each(|state| {
                    fly_up_for_a_second(state);
                    state.release_key(KeyCode::KeyW);
                    state.tick();
                });

                ctx.then("the camera stops", |state| {
                    let before = state.camera().translation;
                    state.tick_for(1.0);
                    assert_eq!(state.camera().translation, before);
                });
            });

            scenario.when("the mouse moves with the right button held", |ctx| {
                ctx.before_each(|state| {
                    state.reset();
                    state.set_mouse_button(MouseButton::Right, true);
                    state.move_mouse(Vec2::new(90.0, 0.0));
                    state.tick();
                });

                ctx.then("the camera yaws to the right", |state| {
                    let forward = state.camera().forward();
                    assert!(forward.x > 0.9, "forward is {forward:?}");
                    assert_vec3_near(state.camera().translation, CAMERA_START, 1e-4);
                });
            });

            scenario.when("the mouse moves with no button held", |ctx| {
                ctx.before_each(|state| {
                    state.reset();
                    state.move_mouse(Vec2::new(90.0, 40.0));
                    state.tick();
                });

                ctx.then("the camera keeps its orientation", |state| {
                    assert_same_orientation(state.camera().rotation, start().rotation, 1e-6);
                });
            });

            scenario.when("the wheel scrolls two lines forward", move |ctx| {
                ctx.before_each(|state| {
                    state.reset();
                    state.scroll(2.0);
                    state.tick();
                });

                ctx.then("the camera dollies toward what it looks at", move |state| {
                    let expected = CAMERA_START + start().forward() * 2.0 * dolly_speed;
                    assert_vec3_near(state.camera().translation, expected, 1e-3);
                });
            });

            scenario.when("a touchpad scrolls two lines' worth of pixels", move |ctx| {
                ctx.before_each(|state| {
                    state.reset();
                    state.scroll_pixels(2.0 * PIXELS_PER_LINE);
                    state.tick();
                });

                ctx.then("the camera dollies as far as two wheel lines", move |state| {
                    let expected = CAMERA_START + start().forward() * 2.0 * dolly_speed;
                    assert_vec3_near(state.camera().translation, expected, 1e-3);
                });
            });
        },
    ));
}
