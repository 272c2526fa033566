//! Decision-boundary rendering for two-feature classifiers.
//!
//! [`render`] pads the bounding box of the data, evaluates a fitted
//! [`Classifier`](sensorplot_helpers::Classifier) over a dense regular grid and
//! composes the predicted-class background with a scatter of the labeled
//! samples. The drawing backend is chosen once per process with
//! [`init_backend`].

mod backend;
mod error;
mod grid;
mod options;
mod palette;
mod render;

pub use backend::{Backend, active_backend, init_backend};
pub use error::BoundaryError;
pub use grid::{Bounds, DecisionGrid, decision_grid, flip_rows, padded_bounds};
pub use options::RenderOptions;
pub use render::{Rendered, Visual, render, render_with_backend};

/// Grid subdivisions per axis unless configured otherwise.
pub const DEFAULT_RESOLUTION: usize = 200;
