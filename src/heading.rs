//! Fixed-duration smooth turns shared by both controllers.
//!
//! A [`Turn`] blends an actor's orientation from where it was facing when the
//! turn started to where it should face, using spherical interpolation over a
//! fixed duration. Controllers own at most one turn per actor and drop it once
//! [`Turn::advance`] reports [`TurnProgress::Finished`].

use glam::Quat;

/// Outcome of advancing a [`Turn`] by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnProgress {
    /// The turn is still blending; apply the contained orientation.
    InProgress(Quat),
    /// The turn has completed; the contained orientation is the exact
    /// destination.
    Finished(Quat),
}

impl TurnProgress {
    /// Orientation to apply this frame.
    #[must_use]
    pub const fn orientation(self) -> Quat {
        match self {
            Self::InProgress(rotation) | Self::Finished(rotation) => rotation,
        }
    }

    /// Whether the turn completed this frame.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// An in-flight rotation from one orientation to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    from: Quat,
    to: Quat,
    elapsed: f32,
    duration: f32,
}

impl Turn {
    /// Starts a turn from `from` to `to` lasting `duration` seconds.
    #[must_use]
    pub const fn new(from: Quat, to: Quat, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// Orientation the turn started from.
    #[must_use]
    pub const fn source(&self) -> Quat {
        self.from
    }

    /// Orientation the turn ends on.
    #[must_use]
    pub const fn destination(&self) -> Quat {
        self.to
    }

    /// Seconds of the turn already played, never more than the duration.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Total length of the turn in seconds.
    #[must_use]
    pub const fn duration(&self) -> f32 {
        self.duration
    }

    /// Advances the turn by `delta` seconds.
    ///
    /// Elapsed time is clamped to the duration, so however large `delta` is
    /// the turn finishes exactly on its destination rather than past it.
    /// Negative deltas are treated as zero.
    ///
    /// # Examples
    /// ```
    /// use glam::Quat;
    /// use professor_walk::heading::{Turn, TurnProgress};
    ///
    /// let to = Quat::from_rotation_y(1.0);
    /// let mut turn = Turn::new(Quat::IDENTITY, to, 0.3);
    /// assert!(matches!(turn.advance(0.1), TurnProgress::InProgress(_)));
    /// assert_eq!(turn.advance(5.0), TurnProgress::Finished(to));
    /// ```
    pub fn advance(&mut self, delta: f32) -> TurnProgress {
        if self.duration <= 0.0 {
            self.elapsed = 0.0;
            return TurnProgress::Finished(self.to);
        }

        self.elapsed = (self.elapsed + delta.max(0.0)).min(self.duration);
        if self.elapsed >= self.duration {
            TurnProgress::Finished(self.to)
        } else {
            let fraction = self.elapsed / self.duration;
            TurnProgress::InProgress(self.from.slerp(self.to, fraction))
        }
    }
}
