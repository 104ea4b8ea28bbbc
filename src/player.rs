//! The keyboard-driven professor.
//!
//! Arrow keys feed a [`DirectionAccumulator`]. Whenever the net direction
//! changes the professor starts a smooth [`Turn`] toward it, then walks along
//! it while the keys stay held, snapping its facing to the walking direction.
//! Releasing everything stops it dead; stopping is never smoothed.

use bevy::app::AppExit;
use bevy::prelude::*;
use log::{debug, info};

use crate::animation::{Gait, GaitSource};
use crate::constants::PROFESSOR_FORWARD;
use crate::heading::{Turn, TurnProgress};
use crate::input::{DirectionAccumulator, MOVE_BINDINGS, QUIT_KEY};
use crate::settings::ControllerSettings;
use crate::vector_math::heading_rotation;

/// What the professor is doing this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PlayerMotion {
    /// No direction held.
    #[default]
    Idle,
    /// Turning on the spot toward a new direction before walking.
    Turning(Turn),
    /// Walking along the held direction.
    Walking,
}

/// Controller state for the player-driven actor.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Player {
    velocity: DirectionAccumulator,
    motion: PlayerMotion,
}

impl GaitSource for Player {
    fn gait(&self) -> Gait {
        match self.motion {
            PlayerMotion::Idle => Gait::Idle,
            PlayerMotion::Turning(_) | PlayerMotion::Walking => Gait::Walk,
        }
    }
}

impl Player {
    /// Current motion state.
    #[must_use]
    pub const fn motion(&self) -> PlayerMotion {
        self.motion
    }

    /// Net direction currently held, not normalised.
    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.velocity.vector()
    }

    /// Applies a direction key press (`pressed`) or release and reacts to the
    /// resulting change of direction.
    ///
    /// Returns `true` when a new turn was started.
    pub fn steer(
        &mut self,
        unit: Vec3,
        pressed: bool,
        orientation: Quat,
        turn_duration: f32,
    ) -> bool {
        let before = self.velocity.vector();
        if pressed {
            self.velocity.press(unit);
        } else {
            self.velocity.release(unit);
        }
        self.change_direction(before, orientation, turn_duration)
    }

    /// Reacts to the held direction changing from `before` to the current
    /// accumulator value.
    ///
    /// A zero direction cancels any turn and idles. Otherwise the professor
    /// walks, and starts a new turn from `orientation` unless it already heads
    /// the right way. Returns `true` when a new turn was started.
    pub fn change_direction(&mut self, before: Vec3, orientation: Quat, turn_duration: f32) -> bool {
        if self.velocity.is_idle() {
            if self.motion != PlayerMotion::Idle {
                debug!("professor stopped");
            }
            self.motion = PlayerMotion::Idle;
            return false;
        }

        let target = self.velocity.direction();
        if before.normalize_or_zero() == target {
            if self.motion == PlayerMotion::Idle {
                self.motion = PlayerMotion::Walking;
            }
            return false;
        }

        let facing = heading_rotation(PROFESSOR_FORWARD, target);
        self.motion = PlayerMotion::Turning(Turn::new(orientation, facing, turn_duration));
        debug!("professor turning toward {target}");
        true
    }

    /// Advances the professor by one frame of `delta` seconds.
    ///
    /// An active turn is advanced and the professor stays put; once the turn
    /// lands it walks from the next frame on. While walking it moves along the
    /// held direction at `walk_speed` and faces it.
    pub fn advance(&mut self, transform: &mut Transform, delta: f32, walk_speed: f32) {
        match self.motion {
            PlayerMotion::Turning(mut turn) => {
                let progress = turn.advance(delta);
                transform.rotation = progress.orientation();
                self.motion = match progress {
                    TurnProgress::InProgress(_) => PlayerMotion::Turning(turn),
                    TurnProgress::Finished(_) => PlayerMotion::Walking,
                };
            }
            PlayerMotion::Walking => {
                let direction = self.velocity.direction();
                if direction != Vec3::ZERO {
                    transform.translation += direction * walk_speed * delta;
                    transform.rotation = heading_rotation(PROFESSOR_FORWARD, direction);
                }
            }
            PlayerMotion::Idle => {}
        }
    }
}

/// Feeds arrow key presses and releases into the professor and ends the run
/// on the quit key.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn player_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<ControllerSettings>,
    mut players: Query<(&mut Player, &Transform)>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(QUIT_KEY) {
        info!("quit requested");
        exit.write(AppExit::Success);
    }

    for (mut player, transform) in &mut players {
        for (key, unit) in MOVE_BINDINGS {
            if keyboard.just_pressed(key) {
                player.steer(unit, true, transform.rotation, settings.turn_duration);
            }
            if keyboard.just_released(key) {
                player.steer(unit, false, transform.rotation, settings.turn_duration);
            }
        }
    }
}

/// Moves and turns the professor for this frame.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn player_motion_system(
    time: Res<Time>,
    settings: Res<ControllerSettings>,
    mut players: Query<(&mut Player, &mut Transform)>,
) {
    let delta = time.delta_secs();
    for (mut player, mut transform) in &mut players {
        player.advance(&mut transform, delta, settings.walk_speed);
    }
}
