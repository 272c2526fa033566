use std::collections::BTreeSet;

use colorgrad::{Color as GradColor, CustomGradient};
use plotters::style::{Color, Palette, Palette99, RGBAColor};

use crate::BoundaryError;

/// Distinct values of `labels`, in ascending order.
pub(crate) fn distinct<'a, L, I>(labels: I) -> Vec<L>
where
    L: Clone + Ord + 'a,
    I: IntoIterator<Item = &'a L>,
{
    labels
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

pub(crate) fn parse_color(spec: &str) -> Result<GradColor, BoundaryError> {
    GradColor::from_html(spec).map_err(|source| BoundaryError::Color {
        spec: spec.to_string(),
        source,
    })
}

fn to_plotters(color: &GradColor) -> RGBAColor {
    let [r, g, b, a] = color.to_rgba8();
    RGBAColor(r, g, b, f64::from(a) / 255.0)
}

/// Spreads `classes` evenly along a linear gradient through `specs`.
///
/// With two classes and two colors each class gets exactly one of them.
pub(crate) fn background_colors(
    specs: &[String],
    classes: usize,
) -> Result<Vec<RGBAColor>, BoundaryError> {
    if specs.len() < 2 {
        return Err(BoundaryError::BackgroundColors(specs.len()));
    }
    let stops = specs
        .iter()
        .map(|s| parse_color(s))
        .collect::<Result<Vec<_>, _>>()?;
    let gradient = CustomGradient::new().colors(&stops).build()?;

    let span = classes.saturating_sub(1).max(1) as f64;
    Ok((0..classes)
        .map(|i| to_plotters(&gradient.at(i as f64 / span)))
        .collect())
}

/// Marker colors for `classes` labels.
///
/// The first labels take `specs` in order; any label past the end of the
/// palette falls back to the plotting library's default palette.
pub(crate) fn point_colors(
    specs: &[String],
    classes: usize,
) -> Result<Vec<RGBAColor>, BoundaryError> {
    let mut fixed = specs
        .iter()
        .map(|s| parse_color(s).map(|c| to_plotters(&c)))
        .collect::<Result<Vec<_>, _>>()?;
    fixed.truncate(classes);
    let fallback = (fixed.len()..classes).map(|i| Palette99::pick(i).to_rgba());
    Ok(fixed.into_iter().chain(fallback).collect())
}
