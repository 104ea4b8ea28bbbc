#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the walking-professor demo logic.
//! Re-exports the controllers, their components and the plugins wiring them
//! into a Bevy app for the main application and tests.
pub mod animation;
pub mod camera;
pub mod constants;
pub mod heading;
pub mod input;
pub mod logging;
pub mod patrol;
pub mod player;
pub mod scene;
pub mod settings;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use animation::{ActiveAnimation, Gait, GaitSource};
pub use camera::FlyCamera;
pub use heading::{Turn, TurnProgress};
pub use input::DirectionAccumulator;
pub use logging::init as init_logging;
pub use patrol::{PatrolMode, PatrolMotion, PatrolRng, PatrolState, WaypointQueue};
pub use player::{Player, PlayerMotion};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use scene::ScenePlugin;
pub use scene::{spawn_actors, ControllerPlugin};
pub use settings::{ControllerSettings, SettingsError};
pub use vector_math::{heading_rotation, vec_normalize};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use professor_walk::prelude::*;
    //! ```

    pub use crate::ControllerPlugin;
    pub use crate::ControllerSettings;
    pub use crate::PatrolRng;
    pub use crate::PatrolState;
    pub use crate::Player;
}
