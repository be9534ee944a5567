/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Fatal configuration errors raised while building a world.
///
/// Every variant indicates an authoring bug, not a runtime condition;
/// callers are expected to abort startup with the diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// Two locations share a name (case-insensitive).
    #[error("duplicate location: \"{0}\"")]
    DuplicateLocation(String),

    /// An exit references a location that does not exist.
    #[error("dangling exit: \"{from}\" --{verb}--> \"{to}\"")]
    DanglingExit {
        /// The location the exit leaves from.
        from: String,
        /// The exit's trigger verb.
        verb: String,
        /// The unresolved destination name.
        to: String,
    },

    /// A world must contain at least one location.
    #[error("world has no locations")]
    Empty,
}
