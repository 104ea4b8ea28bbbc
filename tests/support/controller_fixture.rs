//! Shared fixture for controller behaviour tests.
//!
//! The rspec suites tick a headless Bevy `App` and need to:
//! - safely share that `App` across rspec closures,
//! - start every scenario from a freshly spawned scene, and
//! - press keys and read actor state without repeating query boilerplate.
//!
//! rspec runs a block's `before_each` once per direct child, not once per
//! nested example, so scenarios are kept one level deep and each context's
//! hook calls [`ControllerFixture::reset`] before its own setup.
#![allow(dead_code, reason = "Each test binary uses a different subset.")]

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use professor_walk::scene::{ninja_bundle, professor_bundle};
use professor_walk::{
    ActiveAnimation, FlyCamera, PatrolState, Player, CAMERA_FOCUS, CAMERA_START,
};
use rspec::block::Suite;
use rspec::{ConfigurationBuilder, Logger, Runner};

/// Frame length used by [`ControllerFixture::tick`].
pub const FRAME: f32 = 1.0 / 60.0;

/// The scene app: both actors and a fly camera on top of
/// [`test_utils::headless_app`].
pub struct SceneApp(App);

impl SceneApp {
    fn spawn() -> Self {
        let mut app = test_utils::headless_app();
        let world = app.world_mut();
        world.spawn(professor_bundle());
        world.spawn(ninja_bundle());
        world.spawn((
            Transform::from_translation(CAMERA_START).looking_at(CAMERA_FOCUS, Vec3::Y),
            FlyCamera::default(),
        ));
        Self(app)
    }

    fn input<T: Resource>(&mut self) -> Mut<'_, T> {
        self.0.world_mut().resource_mut::<T>()
    }
}

impl Deref for SceneApp {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SceneApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Debug for SceneApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneApp")
            .field("entities", &self.0.world().entities().len())
            .finish()
    }
}

// SAFETY: rspec environments must be `Clone + Send + Sync`. Suites run
// serially through `ControllerFixture::verify`, and the app is only reached
// through the fixture's mutex.
unsafe impl Send for SceneApp {}
unsafe impl Sync for SceneApp {}

/// A shared fixture owning a headless app with both actors and a fly camera.
#[derive(Debug, Clone)]
pub struct ControllerFixture {
    app: Arc<Mutex<SceneApp>>,
}

impl ControllerFixture {
    /// Creates the fixture with a freshly built scene.
    #[must_use]
    pub fn bootstrap() -> Self {
        Self {
            app: Arc::new(Mutex::new(SceneApp::spawn())),
        }
    }

    /// Runs a controller suite one example at a time; any failed example
    /// exits the test binary with a failure status.
    ///
    /// # Panics
    /// Panics if the rspec configuration is rejected.
    pub fn verify(suite: &Suite<Self>) {
        let logger = Arc::new(Logger::new(std::io::stdout()));
        let config = ConfigurationBuilder::default()
            .parallel(false)
            .exit_on_failure(true)
            .build()
            .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
        Runner::new(config, vec![logger]).run(suite);
    }

    /// Replaces the app with a fresh scene.
    pub fn reset(&self) {
        *self.app_guard() = SceneApp::spawn();
    }

    /// Locks the scene, recovering it if an earlier example panicked while
    /// holding the lock.
    pub fn app_guard(&self) -> MutexGuard<'_, SceneApp> {
        self.app.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advances the application by a single frame of [`FRAME`] seconds.
    pub fn tick(&self) {
        self.tick_for(FRAME);
    }

    /// Advances the application by a single frame of `seconds`.
    pub fn tick_for(&self, seconds: f32) {
        test_utils::step(&mut self.app_guard(), seconds);
    }

    /// Runs `frames` frames of [`FRAME`] seconds.
    pub fn run_frames(&self, frames: usize) {
        for _ in 0..frames {
            self.tick();
        }
    }

    /// Simulates pressing a key.
    pub fn press_key(&self, key: KeyCode) {
        self.app_guard().input::<ButtonInput<KeyCode>>().press(key);
    }

    /// Simulates releasing a key.
    pub fn release_key(&self, key: KeyCode) {
        self.app_guard().input::<ButtonInput<KeyCode>>().release(key);
    }

    /// Simulates holding or letting go of a mouse button.
    pub fn set_mouse_button(&self, button: MouseButton, held: bool) {
        let mut app = self.app_guard();
        let mut buttons = app.input::<ButtonInput<MouseButton>>();
        if held {
            buttons.press(button);
        } else {
            buttons.release(button);
        }
    }

    /// Queues relative mouse motion for the next frame.
    pub fn move_mouse(&self, delta: Vec2) {
        self.app_guard().input::<AccumulatedMouseMotion>().delta = delta;
    }

    /// Queues vertical wheel scroll, in lines, for the next frame.
    pub fn scroll(&self, lines: f32) {
        self.queue_scroll(MouseScrollUnit::Line, lines);
    }

    /// Queues vertical touchpad scroll, in pixels, for the next frame.
    pub fn scroll_pixels(&self, pixels: f32) {
        self.queue_scroll(MouseScrollUnit::Pixel, pixels);
    }

    fn queue_scroll(&self, unit: MouseScrollUnit, amount: f32) {
        let mut app = self.app_guard();
        let mut scroll = app.input::<AccumulatedMouseScroll>();
        scroll.unit = unit;
        scroll.delta = Vec2::new(0.0, amount);
    }

    /// Moves the professor without going through input.
    pub fn place_professor(&self, position: Vec3) {
        let mut app = self.app_guard();
        let world = app.world_mut();
        let mut query = world.query_filtered::<&mut Transform, With<Player>>();
        for mut transform in query.iter_mut(world) {
            transform.translation = position;
        }
    }

    /// The professor's transform, controller and animation.
    ///
    /// # Panics
    /// Panics if the professor is missing.
    pub fn professor(&self) -> (Transform, Player, ActiveAnimation) {
        let mut app = self.app_guard();
        let world = app.world_mut();
        let mut query = world.query::<(&Transform, &Player, &ActiveAnimation)>();
        query
            .iter(world)
            .next()
            .map(|(t, p, a)| (*t, *p, *a))
            .unwrap_or_else(|| panic!("professor not spawned"))
    }

    /// The ninja's transform, controller and animation.
    ///
    /// # Panics
    /// Panics if the ninja is missing.
    pub fn ninja(&self) -> (Transform, PatrolState, ActiveAnimation) {
        let mut app = self.app_guard();
        let world = app.world_mut();
        let mut query = world.query::<(&Transform, &PatrolState, &ActiveAnimation)>();
        query
            .iter(world)
            .next()
            .map(|(t, p, a)| (*t, p.clone(), *a))
            .unwrap_or_else(|| panic!("ninja not spawned"))
    }

    /// The fly camera's transform.
    ///
    /// # Panics
    /// Panics if the camera is missing.
    pub fn camera(&self) -> Transform {
        let mut app = self.app_guard();
        let world = app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<FlyCamera>>();
        query
            .iter(world)
            .next()
            .copied()
            .unwrap_or_else(|| panic!("camera not spawned"))
    }

    /// Whether a system asked the app to exit.
    pub fn exit_requested(&self) -> bool {
        self.app_guard().should_exit().is_some()
    }
}
