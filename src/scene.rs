//! Plugins wiring the controllers into a Bevy app and spawning the scene.
//!
//! [`ControllerPlugin`] carries the simulation only and runs headless, which
//! is how the behaviour tests drive it. [`ScenePlugin`] (behind the `render`
//! feature) adds the visible world: camera, light, stand-in meshes for the
//! characters and the ground grid.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::animation::{animation_system, ActiveAnimation, Gait};
use crate::camera::{fly_camera_input_system, fly_camera_system, mouse_look_system};
use crate::constants::{NINJA_START, PROFESSOR_START};
use crate::patrol::{patrol_system, PatrolRng, PatrolState};
use crate::player::{player_input_system, player_motion_system, Player};
use crate::settings::ControllerSettings;

/// The player-controlled character.
#[must_use]
pub fn professor_bundle() -> impl Bundle {
    (
        Name::new("Professor"),
        Player::default(),
        ActiveAnimation::default(),
        Transform::from_translation(PROFESSOR_START),
    )
}

/// The patrolling character, turned to face the professor's side of the
/// grid.
#[must_use]
pub fn ninja_bundle() -> impl Bundle {
    (
        Name::new("Ninja"),
        PatrolState::new(),
        ActiveAnimation::default(),
        Transform::from_translation(NINJA_START).with_rotation(Quat::from_rotation_y(PI)),
    )
}

/// Spawns both actors.
pub fn spawn_actors(mut commands: Commands) {
    commands.spawn(professor_bundle());
    commands.spawn(ninja_bundle());
    log::info!("spawned professor at {PROFESSOR_START} and ninja at {NINJA_START}");
}

/// Installs controller resources and the per-frame controller systems.
///
/// Resources already present (for example settings loaded from a file, or a
/// seeded [`PatrolRng`]) are kept. Input resources are expected from the
/// host's input plugin.
///
/// Within a frame the order is fixed: input, camera, professor, ninja, then
/// animation clocks, so the ninja always sees where the professor stands
/// this tick.
#[derive(Debug, Default)]
pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ActiveAnimation>();
        app.register_type::<Gait>();
        app.init_resource::<ControllerSettings>();
        app.init_resource::<PatrolRng>();
        app.add_systems(
            Update,
            (
                (player_input_system, fly_camera_input_system),
                (fly_camera_system, mouse_look_system).chain(),
                player_motion_system,
                patrol_system,
                (
                    animation_system::<Player>,
                    animation_system::<PatrolState>,
                ),
            )
                .chain(),
        );
    }
}

#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use render::ScenePlugin;

#[cfg(feature = "render")]
mod render {
    use bevy::core_pipeline::tonemapping::Tonemapping;
    use bevy::prelude::*;

    use super::{spawn_actors, ControllerPlugin};
    use crate::camera::FlyCamera;
    use crate::constants::{
        CAMERA_FOCUS, CAMERA_START, GRID_HALF_EXTENT, GRID_LINES, GRID_SPACING,
    };
    use crate::patrol::PatrolState;
    use crate::player::Player;

    const AXIS_LENGTH: f32 = 50.0;

    /// Full-strength white ambient fill.
    pub(super) fn ambient_light() -> AmbientLight {
        AmbientLight {
            color: Color::WHITE,
            brightness: 1_000.0,
            ..default()
        }
    }

    /// The full demo: controllers, actors, camera, light and grid.
    #[derive(Debug, Default)]
    pub struct ScenePlugin;

    impl Plugin for ScenePlugin {
        fn build(&self, app: &mut App) {
            app.add_plugins(ControllerPlugin);
            app.insert_resource(ambient_light());
            app.add_systems(
                Startup,
                (spawn_actors, dress_actors, spawn_camera_and_light).chain(),
            );
            app.add_systems(Update, draw_grid);
        }
    }

    fn spawn_camera_and_light(mut commands: Commands) {
        commands.spawn((
            Camera3d::default(),
            Tonemapping::None,
            Transform::from_translation(CAMERA_START).looking_at(CAMERA_FOCUS, Vec3::Y),
            FlyCamera::default(),
            Name::new("Camera"),
        ));
        commands.spawn((
            DirectionalLight {
                illuminance: 8_000.0,
                ..default()
            },
            Transform::from_xyz(200.0, 600.0, 300.0).looking_at(Vec3::ZERO, Vec3::Y),
        ));
    }

    /// Gives each actor a capsule body and a small block marking the way its
    /// asset faces.
    fn dress_actors(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        actors: Query<(Entity, Has<Player>), Or<(With<Player>, With<PatrolState>)>>,
    ) {
        let body = meshes.add(Capsule3d::new(15.0, 70.0));
        let nose = meshes.add(Cuboid::new(6.0, 6.0, 20.0));
        let professor = materials.add(Color::srgb(0.85, 0.7, 0.5));
        let ninja = materials.add(Color::srgb(0.15, 0.15, 0.2));

        for (entity, is_player) in &actors {
            let (material, facing) = if is_player {
                (professor.clone(), crate::constants::PROFESSOR_FORWARD)
            } else {
                (ninja.clone(), crate::constants::NINJA_FORWARD)
            };
            commands
                .entity(entity)
                .insert(Visibility::default())
                .with_children(|parent| {
                    parent.spawn((
                        Mesh3d(body.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_xyz(0.0, 50.0, 0.0),
                    ));
                    parent.spawn((
                        Mesh3d(nose.clone()),
                        MeshMaterial3d(material),
                        Transform::from_translation(Vec3::Y * 80.0 + facing * 18.0),
                    ));
                });
        }
    }

    fn draw_grid(mut gizmos: Gizmos) {
        let colour = Color::srgb(0.8, 0.8, 0.8);
        for line in 0..GRID_LINES {
            let offset = -GRID_HALF_EXTENT + f32::from(line) * GRID_SPACING;
            gizmos.line(
                Vec3::new(-GRID_HALF_EXTENT, 0.0, offset),
                Vec3::new(GRID_HALF_EXTENT, 0.0, offset),
                colour,
            );
            gizmos.line(
                Vec3::new(offset, 0.0, -GRID_HALF_EXTENT),
                Vec3::new(offset, 0.0, GRID_HALF_EXTENT),
                colour,
            );
        }

        gizmos.line(Vec3::ZERO, Vec3::X * AXIS_LENGTH, Color::srgb(1.0, 0.0, 0.0));
        gizmos.line(Vec3::ZERO, Vec3::Y * AXIS_LENGTH, Color::srgb(0.0, 1.0, 0.0));
        gizmos.line(Vec3::ZERO, Vec3::Z * AXIS_LENGTH, Color::srgb(0.0, 0.0, 1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_initialises_resources() {
        let mut app = App::new();
        app.add_plugins(ControllerPlugin);
        assert!(app.world().contains_resource::<ControllerSettings>());
        assert!(app.world().contains_resource::<PatrolRng>());
    }

    #[test]
    fn plugin_keeps_existing_settings() {
        let custom = ControllerSettings {
            walk_speed: 5.0,
            ..ControllerSettings::default()
        };
        let mut app = App::new();
        app.insert_resource(custom.clone());
        app.add_plugins(ControllerPlugin);
        assert_eq!(app.world().resource::<ControllerSettings>(), &custom);
    }

    #[cfg(feature = "render")]
    #[test]
    fn scene_fills_with_white_ambient_light() {
        let mut app = App::new();
        app.add_plugins(ScenePlugin);
        let light = app.world().resource::<AmbientLight>();
        assert_eq!(light.color, Color::WHITE);
        approx::assert_relative_eq!(light.brightness, render::ambient_light().brightness);
    }

    #[test]
    fn ninja_starts_facing_backwards() {
        let mut world = World::new();
        let ninja = world.spawn(ninja_bundle()).id();
        let transform = world
            .get::<Transform>(ninja)
            .copied()
            .unwrap_or_else(|| panic!("ninja has no transform"));
        assert_eq!(transform.translation, NINJA_START);
        assert!((transform.rotation * Vec3::Z).z < -0.99);
    }
}
