//! Process-wide logger setup.
//!
//! The controllers log mode and clip changes under this crate's target. The
//! graphics stack's targets are held at `warn` unless `RUST_LOG` says
//! otherwise.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Log target prefix shared by every controller module.
pub const CONTROLLER_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Targets that flood the log at `info` and below once a window is open.
pub const NOISY_TARGETS: [&str; 4] = ["wgpu", "naga", "winit", "bevy_render"];

fn directive(target: Option<&str>, level: LevelFilter) -> String {
    let level = level.as_str().to_ascii_lowercase();
    target.map_or_else(|| level.clone(), |target| format!("{target}={level}"))
}

/// Filter used when `RUST_LOG` is unset.
///
/// Everything logs at `info`; the controllers drop to `debug` when
/// `verbose` is set and the graphics stack is capped at `warn`.
///
/// # Examples
/// ```
/// use professor_walk::logging::default_filter;
///
/// assert_eq!(
///     default_filter(true),
///     "info,professor_walk=debug,wgpu=warn,naga=warn,winit=warn,bevy_render=warn"
/// );
/// ```
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    let controllers = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut directives = vec![
        directive(None, LevelFilter::Info),
        directive(Some(CONTROLLER_TARGET), controllers),
    ];
    directives.extend(
        NOISY_TARGETS
            .into_iter()
            .map(|target| directive(Some(target), LevelFilter::Warn)),
    );
    directives.join(",")
}

/// Initializes the global logger from `RUST_LOG`, falling back to
/// [`default_filter`].
///
/// Calling it again once a logger is installed leaves the first one in place.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    if Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already installed, keeping it");
    }
}
