//! The patrolling ninja.
//!
//! The ninja walks a square loop of waypoints. Each leg starts with a smooth
//! turn toward the next waypoint, then a straight walk that snaps exactly onto
//! the waypoint on arrival. When the professor comes closer than the proximity
//! threshold the ninja drops its loop and chases the professor's position,
//! re-targeting at every arrival; once the professor gets away it resumes a
//! square loop.
//!
//! The loop it resumes is picked by a random draw made at the last patrol
//! waypoint it reached. The draw comes from [`PatrolRng`] so hosts and tests
//! can seed it.

use std::collections::VecDeque;

use bevy::prelude::*;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::{Gait, GaitSource};
use crate::constants::{NINJA_FORWARD, PATROL_CORNERS};
use crate::heading::{Turn, TurnProgress};
use crate::player::Player;
use crate::settings::ControllerSettings;
use crate::vector_math::heading_rotation;

/// Number of distinct square loops, one per starting corner.
pub const PATROL_LOOPS: usize = PATROL_CORNERS.len();

/// Whether the ninja follows its waypoints or the professor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatrolMode {
    /// Walking the waypoint loop.
    #[default]
    Patrolling,
    /// Heading for the professor's position.
    Chasing,
}

/// A straight walk toward a destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    /// Point the leg ends on.
    pub destination: Vec3,
    /// Unit direction of travel, zero for a leg of no length.
    pub direction: Vec3,
    /// Distance still to cover.
    pub remaining: f32,
}

/// What the ninja is doing this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PatrolMotion {
    /// No destination armed.
    #[default]
    Idle,
    /// Turning toward the leg it is about to walk.
    Turning {
        /// The turn in progress.
        turn: Turn,
        /// The leg walked once the turn lands.
        leg: Leg,
    },
    /// Walking a leg.
    Walking(Leg),
}

/// Cyclic queue of points the ninja walks toward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointQueue(VecDeque<Vec3>);

impl WaypointQueue {
    /// The square loop starting at corner `start` (taken modulo the number of
    /// corners) and continuing in walking order.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use professor_walk::patrol::WaypointQueue;
    ///
    /// let queue = WaypointQueue::square_loop(1);
    /// assert_eq!(queue.front(), Some(Vec3::new(400.0, 0.0, -400.0)));
    /// ```
    #[must_use]
    pub fn square_loop(start: usize) -> Self {
        let mut points: VecDeque<Vec3> = PATROL_CORNERS.into_iter().collect();
        points.rotate_left(start % PATROL_CORNERS.len());
        Self(points)
    }

    /// Takes the front point and re-queues it at the back.
    pub fn cycle(&mut self) -> Option<Vec3> {
        let point = self.0.pop_front()?;
        self.0.push_back(point);
        Some(point)
    }

    /// Replaces the queue with the single point `target`.
    pub fn retarget(&mut self, target: Vec3) {
        self.0.clear();
        self.0.push_back(target);
    }

    /// The next point to be taken.
    #[must_use]
    pub fn front(&self) -> Option<Vec3> {
        self.0.front().copied()
    }

    /// Whether no points are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of queued points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Queued points in order.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.0.iter().copied()
    }
}

/// Random source for picking the loop resumed after a chase.
#[derive(Resource, Debug, Clone)]
pub struct PatrolRng(pub StdRng);

impl PatrolRng {
    /// Deterministic source for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for PatrolRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Controller state for the patrolling actor.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PatrolState {
    mode: PatrolMode,
    motion: PatrolMotion,
    waypoints: WaypointQueue,
    loop_pick: usize,
}

impl Default for PatrolState {
    fn default() -> Self {
        Self::new()
    }
}

impl GaitSource for PatrolState {
    fn gait(&self) -> Gait {
        match self.motion {
            PatrolMotion::Idle => Gait::Idle,
            PatrolMotion::Turning { .. } | PatrolMotion::Walking(_) => Gait::Walk,
        }
    }
}

impl PatrolState {
    /// Idle, patrolling, with the first square loop queued.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: PatrolMode::Patrolling,
            motion: PatrolMotion::Idle,
            waypoints: WaypointQueue::square_loop(0),
            loop_pick: 0,
        }
    }

    /// Patrol or chase.
    #[must_use]
    pub const fn mode(&self) -> PatrolMode {
        self.mode
    }

    /// Current motion state.
    #[must_use]
    pub const fn motion(&self) -> PatrolMotion {
        self.motion
    }

    /// Points still to visit.
    #[must_use]
    pub const fn waypoints(&self) -> &WaypointQueue {
        &self.waypoints
    }

    /// Loop index drawn at the last patrol waypoint, in `0..PATROL_LOOPS`.
    #[must_use]
    pub const fn loop_pick(&self) -> usize {
        self.loop_pick
    }

    /// Advances the ninja by one frame of `delta` seconds given the player's
    /// position this frame.
    ///
    /// The mode is settled first; then exactly one of picking a destination,
    /// turning, or walking happens.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        transform: &mut Transform,
        player: Vec3,
        delta: f32,
        settings: &ControllerSettings,
        rng: &mut R,
    ) {
        self.update_mode(transform, player, settings, rng);

        match self.motion {
            PatrolMotion::Idle => {
                self.next_location(transform, player, settings.turn_duration, rng);
            }
            PatrolMotion::Turning { mut turn, leg } => {
                let progress = turn.advance(delta);
                transform.rotation = progress.orientation();
                self.motion = match progress {
                    TurnProgress::InProgress(_) => PatrolMotion::Turning { turn, leg },
                    TurnProgress::Finished(_) => PatrolMotion::Walking(leg),
                };
            }
            PatrolMotion::Walking(mut leg) => {
                let step = settings.walk_speed * delta;
                leg.remaining -= step;
                if leg.remaining <= 0.0 {
                    transform.translation = leg.destination;
                    self.motion = PatrolMotion::Idle;
                    debug!("ninja reached {}", leg.destination);
                    self.next_location(transform, player, settings.turn_duration, rng);
                } else {
                    transform.translation += leg.direction * step;
                    self.motion = PatrolMotion::Walking(leg);
                }
            }
        }
    }

    /// Switches between patrolling and chasing on the proximity threshold.
    ///
    /// Distances exactly on the threshold never change the mode.
    fn update_mode<R: Rng + ?Sized>(
        &mut self,
        transform: &Transform,
        player: Vec3,
        settings: &ControllerSettings,
        rng: &mut R,
    ) {
        let distance = transform.translation.distance(player);
        match self.mode {
            PatrolMode::Patrolling if distance < settings.proximity => {
                info!("ninja spotted the professor at {distance:.1} units, chasing");
                self.mode = PatrolMode::Chasing;
                self.next_location(transform, player, settings.turn_duration, rng);
            }
            PatrolMode::Chasing if distance > settings.proximity => {
                info!(
                    "ninja lost the professor at {distance:.1} units, resuming loop {}",
                    self.loop_pick
                );
                self.mode = PatrolMode::Patrolling;
                self.waypoints = WaypointQueue::square_loop(self.loop_pick);
            }
            _ => {}
        }
    }

    /// Arms the next leg: the next queued waypoint while patrolling, the
    /// player's live position while chasing. Returns `false` when there is
    /// nowhere to go.
    fn next_location<R: Rng + ?Sized>(
        &mut self,
        transform: &Transform,
        player: Vec3,
        turn_duration: f32,
        rng: &mut R,
    ) -> bool {
        if self.waypoints.is_empty() {
            return false;
        }

        let destination = match self.mode {
            PatrolMode::Patrolling => {
                let Some(point) = self.waypoints.cycle() else {
                    return false;
                };
                self.loop_pick = rng.gen_range(0..PATROL_LOOPS);
                point
            }
            PatrolMode::Chasing => {
                self.waypoints.retarget(player);
                player
            }
        };

        let offset = destination - transform.translation;
        let remaining = offset.length();
        let Some(direction) = offset.try_normalize() else {
            self.motion = PatrolMotion::Walking(Leg {
                destination,
                direction: Vec3::ZERO,
                remaining: 0.0,
            });
            return true;
        };

        let leg = Leg {
            destination,
            direction,
            remaining,
        };
        let turn = Turn::new(
            transform.rotation,
            heading_rotation(NINJA_FORWARD, direction),
            turn_duration,
        );
        self.motion = PatrolMotion::Turning { turn, leg };
        true
    }
}

/// Advances every patrolling actor against the player's position this frame.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn patrol_system(
    time: Res<Time>,
    settings: Res<ControllerSettings>,
    mut rng: ResMut<PatrolRng>,
    players: Query<&Transform, With<Player>>,
    mut patrollers: Query<(&mut PatrolState, &mut Transform), Without<Player>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let target = player.translation;
    let delta = time.delta_secs();
    for (mut state, mut transform) in &mut patrollers {
        state.advance(&mut transform, target, delta, &settings, &mut rng.0);
    }
}
