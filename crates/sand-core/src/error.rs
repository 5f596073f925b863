/// Alias for `Result<T, SandError>`.
pub type SandResult<T> = Result<T, SandError>;

/// Errors raised while setting up a session.
///
/// Grid and material operations never return these: an out-of-bounds or
/// occupied target is an ordinary `false`/`None` result.
#[derive(Debug, thiserror::Error)]
pub enum SandError {
    /// The grid would have no slots.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in cells.
        width: u32,
        /// Requested height in cells.
        height: u32,
    },

    /// A material or brush name did not match any known material.
    #[error("unknown material: \"{0}\"")]
    UnknownMaterial(String),

    /// A scene name did not match any preset.
    #[error("unknown scene: \"{0}\"")]
    UnknownScene(String),

    /// A color string could not be parsed.
    #[error("invalid color: \"{0}\"")]
    InvalidColor(String),

    /// The configuration was malformed or out of range.
    #[error("config error: {0}")]
    Config(String),
}
