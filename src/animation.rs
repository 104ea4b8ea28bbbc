//! Animation clip selection keyed off actor motion state.
//!
//! The host engine samples and blends the clips; this module only tracks which
//! named clip an actor should be playing and how far into it the actor is.
//! Both actors follow the same rule: idle actors play `Idle`, turning or
//! walking actors play `Walk`.

use bevy::prelude::*;
use log::debug;

/// Looping animation clips the characters ship with.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gait {
    /// Standing still.
    #[default]
    Idle,
    /// Walking or turning on the spot.
    Walk,
}

impl Gait {
    /// Name of the clip in the character's animation set.
    #[must_use]
    pub const fn clip_name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Walk => "Walk",
        }
    }

    /// Seconds before the clip loops back to its start.
    #[must_use]
    pub const fn clip_length(self) -> f32 {
        match self {
            Self::Idle => 2.0,
            Self::Walk => 1.0,
        }
    }
}

/// Implemented by controller components whose state decides the clip.
pub trait GaitSource {
    /// Clip the actor should currently be playing.
    fn gait(&self) -> Gait;
}

/// The clip an actor is playing and its looping clock.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component, Default)]
pub struct ActiveAnimation {
    gait: Gait,
    time: f32,
}

impl ActiveAnimation {
    /// Switches to `gait`, restarting its clock. Returns `false` when the clip
    /// was already playing.
    pub fn select(&mut self, gait: Gait) -> bool {
        if self.gait == gait {
            return false;
        }
        self.gait = gait;
        self.time = 0.0;
        true
    }

    /// Advances the clip clock, wrapping at the end of the clip.
    pub fn advance(&mut self, delta: f32) {
        self.time = (self.time + delta.max(0.0)).rem_euclid(self.gait.clip_length());
    }

    /// The clip currently playing.
    #[must_use]
    pub const fn gait(&self) -> Gait {
        self.gait
    }

    /// Position in the looping clip, in `0..clip_length` seconds.
    #[must_use]
    pub const fn time(&self) -> f32 {
        self.time
    }
}

/// Keeps each actor's clip in step with its controller and advances the clip
/// clock every frame.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn animation_system<S: Component + GaitSource>(
    time: Res<Time>,
    mut actors: Query<(&S, &mut ActiveAnimation, Option<&Name>)>,
) {
    let delta = time.delta_secs();
    for (source, mut animation, name) in &mut actors {
        let gait = source.gait();
        if animation.select(gait) {
            debug!(
                "{} switched to {} animation",
                name.map_or("actor", Name::as_str),
                gait.clip_name()
            );
        }
        animation.advance(delta);
    }
}
