//! Error types for the fiction engine.

use thiserror::Error;
use tw_core::WorldError;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors raised while wiring a session together.
///
/// Every variant is a configuration error: the scenario and the world
/// disagree, which is an authoring bug caught at startup. Player
/// mistakes are never errors; the dispatcher narrates them instead.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The scenario names a location the world does not contain.
    #[error("scenario {role} location not found: \"{name}\"")]
    UnknownLocation {
        /// Which scenario field held the name ("start", "goal", ...).
        role: &'static str,
        /// The unresolved location name.
        name: String,
    },

    /// A rule's trigger verb is not an exit of the rule's location.
    #[error("\"{location}\" has no \"{trigger}\" exit for the {role} rule")]
    MissingTrigger {
        /// Which rule is misconfigured.
        role: &'static str,
        /// The rule's location.
        location: String,
        /// The trigger verb that failed to resolve.
        trigger: String,
    },

    /// World construction failed.
    #[error(transparent)]
    World(#[from] WorldError),
}
