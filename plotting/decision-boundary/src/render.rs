use std::fmt::Debug;
use std::ops::Range;
use std::path::Path;

use ndarray::ArrayView2;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use sensorplot_helpers::{Classifier, Float};
use tracing::{debug, info};

use crate::backend::{Backend, active_backend};
use crate::grid::{DecisionGrid, decision_grid, padded_bounds};
use crate::palette::{background_colors, distinct, point_colors};
use crate::{BoundaryError, RenderOptions};

const MARKER_SIZE: i32 = 4;

/// Output of a render, in the format of the backend that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Svg(String),
    /// Row-major RGB bytes, three per pixel.
    Bitmap { width: u32, height: u32, rgb: Vec<u8> },
}

/// A composed decision-boundary plot together with the data it was drawn from.
#[derive(Debug, Clone)]
pub struct Visual<F, L> {
    pub grid: DecisionGrid<F, L>,
    /// Background color of every predicted class, in label order.
    pub background: Vec<(L, RGBAColor)>,
    /// Marker color of every input label, in label order.
    pub markers: Vec<(L, RGBAColor)>,
    pub width: u32,
    pub height: u32,
    pub output: Rendered,
}

impl<F, L> Visual<F, L> {
    /// The SVG markup, when rendered with [`Backend::Svg`].
    pub fn svg(&self) -> Option<&str> {
        match &self.output {
            Rendered::Svg(svg) => Some(svg),
            Rendered::Bitmap { .. } => None,
        }
    }

    /// Writes the rendered output to `path`: SVG text or raw RGB bytes.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        match &self.output {
            Rendered::Svg(svg) => std::fs::write(path, svg),
            Rendered::Bitmap { rgb, .. } => std::fs::write(path, rgb),
        }
    }
}

/// Renders the decision boundary of `model` under the registered backend.
///
/// See [`render_with_backend`].
pub fn render<M, F, L>(
    model: &M,
    features: ArrayView2<F>,
    labels: &[L],
    options: &RenderOptions,
) -> Result<Visual<F, L>, BoundaryError>
where
    M: Classifier<F, Label = L>,
    F: Float + Into<f64>,
    L: Clone + Ord + Debug,
{
    let backend = active_backend().ok_or(BoundaryError::BackendNotInitialized)?;
    render_with_backend(backend, model, features, labels, options)
}

/// Renders the decision boundary of `model` over `features` with `backend`.
///
/// The model is asked for one batch of `resolution²` predictions; the
/// predicted classes become the background and `features` is scattered on
/// top, colored by `labels`.
#[tracing::instrument(skip_all, fields(rows = features.nrows(), backend = ?backend))]
pub fn render_with_backend<M, F, L>(
    backend: Backend,
    model: &M,
    features: ArrayView2<F>,
    labels: &[L],
    options: &RenderOptions,
) -> Result<Visual<F, L>, BoundaryError>
where
    M: Classifier<F, Label = L>,
    F: Float + Into<f64>,
    L: Clone + Ord + Debug,
{
    let bounds = padded_bounds(features, options.margin_ratio)?;
    if labels.len() != features.nrows() {
        return Err(BoundaryError::LabelLength {
            rows: features.nrows(),
            labels: labels.len(),
        });
    }
    if options.background_colors.len() < 2 {
        return Err(BoundaryError::BackgroundColors(
            options.background_colors.len(),
        ));
    }

    let marker_classes = distinct(labels);
    let marker_colors = point_colors(&options.point_colors, marker_classes.len())?;

    let grid = decision_grid(model, &bounds, options.resolution)?;
    let grid_classes = distinct(grid.cells.iter());
    let grid_colors = background_colors(&options.background_colors, grid_classes.len())?;
    debug!(
        predicted = grid_classes.len(),
        labeled = marker_classes.len(),
        "assigned class colors"
    );

    let points: Vec<((f64, f64), RGBAColor)> = features
        .rows()
        .into_iter()
        .zip(labels)
        .filter_map(|(row, label)| {
            let idx = marker_classes.binary_search(label).ok()?;
            Some(((row[0].into(), row[1].into()), marker_colors[idx]))
        })
        .collect();
    let scene = Scene {
        options,
        x_range: bounds.x_min.into()..bounds.x_max.into(),
        y_range: bounds.y_min.into()..bounds.y_max.into(),
        tiles: tiles(&grid, &grid_classes, &grid_colors),
        points,
    };

    let (width, height) = (options.width, options.height);
    if width == 0 || height == 0 {
        return Err(BoundaryError::Size { width, height });
    }
    let output = match backend {
        Backend::Svg => {
            let mut svg = String::new();
            compose(
                SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area(),
                &scene,
                true,
            )
            .map_err(|e| BoundaryError::Draw(e.to_string()))?;
            Rendered::Svg(svg)
        }
        Backend::Bitmap => {
            let mut rgb = vec![0u8; width as usize * height as usize * 3];
            compose(
                BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area(),
                &scene,
                false,
            )
            .map_err(|e| BoundaryError::Draw(e.to_string()))?;
            Rendered::Bitmap { width, height, rgb }
        }
    };
    info!(tiles = scene.tiles.len(), "rendered decision boundary");

    Ok(Visual {
        grid,
        background: grid_classes.into_iter().zip(grid_colors).collect(),
        markers: marker_classes.into_iter().zip(marker_colors).collect(),
        width,
        height,
        output,
    })
}

type Tile = ([(f64, f64); 2], RGBAColor);

struct Scene<'a> {
    options: &'a RenderOptions,
    x_range: Range<f64>,
    y_range: Range<f64>,
    tiles: Vec<Tile>,
    points: Vec<((f64, f64), RGBAColor)>,
}

/// Turns the grid into background rectangles, merging horizontal runs of
/// the same class into one rectangle.
fn tiles<F, L>(grid: &DecisionGrid<F, L>, classes: &[L], colors: &[RGBAColor]) -> Vec<Tile>
where
    F: Float + Into<f64>,
    L: Ord,
{
    let (rows, cols) = grid.cells.dim();
    let (x_min, x_max): (f64, f64) = (grid.bounds.x_min.into(), grid.bounds.x_max.into());
    let (y_min, y_max): (f64, f64) = (grid.bounds.y_min.into(), grid.bounds.y_max.into());
    let dx = (x_max - x_min) / cols as f64;
    let dy = (y_max - y_min) / rows as f64;

    let mut tiles = Vec::new();
    for (r, row) in grid.cells.rows().into_iter().enumerate() {
        let top = y_max - r as f64 * dy;
        let mut start = 0;
        while start < row.len() {
            let label = &row[start];
            let mut end = start + 1;
            while end < row.len() && row[end] == *label {
                end += 1;
            }
            if let Ok(idx) = classes.binary_search(label) {
                let left = x_min + start as f64 * dx;
                let right = x_min + end as f64 * dx;
                tiles.push(([(left, top), (right, top - dy)], colors[idx]));
            }
            start = end;
        }
    }
    tiles
}

/// Draws the scene onto `root`.
///
/// Text (caption, tick labels, axis descriptions) is only drawn when
/// `annotate` is set; raster backends have no font to draw it with, so they
/// get the plot area alone.
fn compose<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    scene: &Scene,
    annotate: bool,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    if annotate {
        builder.margin(10).x_label_area_size(40).y_label_area_size(50);
        if let Some(title) = &scene.options.title {
            builder.caption(title, ("sans-serif", 20));
        }
    }
    let mut chart = builder.build_cartesian_2d(scene.x_range.clone(), scene.y_range.clone())?;

    chart.draw_series(
        scene
            .tiles
            .iter()
            .map(|(corners, color)| Rectangle::new(*corners, color.filled())),
    )?;
    if annotate {
        chart
            .configure_mesh()
            .x_desc(scene.options.x_label.as_str())
            .y_desc(scene.options.y_label.as_str())
            .draw()?;
    }
    chart.draw_series(
        scene
            .points
            .iter()
            .map(|(pos, color)| Circle::new(*pos, MARKER_SIZE, color.filled())),
    )?;

    root.present()?;
    Ok(())
}
