/// Error type shared by the core crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A mesh, buffer or engine parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A redraw was requested before a frame buffer was attached
    #[error("Render target unavailable: attach a frame buffer before redrawing")]
    RenderTargetUnavailable,

    #[error("Parse error: {0}")]
    Parse(String),
}
