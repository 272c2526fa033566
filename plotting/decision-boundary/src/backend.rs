use std::sync::OnceLock;

use tracing::info;

/// Drawing backend used for every render in this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// SVG markup kept in memory, suitable for embedding in a notebook or page.
    Svg,
    /// A raw RGB pixel buffer.
    Bitmap,
}

static BACKEND: OnceLock<Backend> = OnceLock::new();

/// Registers the process-wide drawing backend.
///
/// The first registration wins; later calls leave it in place and return the
/// backend that is actually active.
pub fn init_backend(backend: Backend) -> Backend {
    *BACKEND.get_or_init(|| {
        info!(?backend, "registered rendering backend");
        backend
    })
}

/// The registered backend, if [`init_backend`] has run.
pub fn active_backend() -> Option<Backend> {
    BACKEND.get().copied()
}
