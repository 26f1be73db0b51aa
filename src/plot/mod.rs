//! Plot requests and rendering.
//!
//! A [`PlotRequest`] carries everything about a chart except the data: title,
//! axis labels, per-curve labels and styles, an optional fixed range and the
//! figure name. A [`PlotBackend`] turns a request plus one or more [`Curve`]s
//! into an image file.

mod layout;
mod palette;
mod svg;

pub use layout::{AxisConfig, CanvasConfig, FontConfig, LayoutConfig, MarkerConfig};
pub use palette::{style_for, style_in, styles_for, Marker, Rgb, SeriesStyle, STYLE_PALETTE};
pub use svg::SvgPlotter;

use crate::error::{PlotError, Result};
use std::ffi::OsString;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// One `(x, y)` data pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Independent variable samples.
    pub x: Vec<f64>,
    /// Dependent variable samples.
    pub y: Vec<f64>,
}

impl Curve {
    /// Create a curve; the shorter of the two vectors bounds the point count.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over finite points.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .iter()
            .copied()
            .zip(self.y.iter().copied())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

/// Axis bounds of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRange {
    /// X axis bounds.
    pub x: Range<f64>,
    /// Y axis bounds.
    pub y: Range<f64>,
}

impl PlotRange {
    /// Create a range from `[x_min, x_max, y_min, y_max]`.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x: x_min..x_max,
            y: y_min..y_max,
        }
    }

    /// Bounds enclosing every finite point of `curves`, padded by `padding`
    /// of the span on each side.
    pub fn enclosing(curves: &[Curve], padding: f64) -> Self {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for (px, py) in curves.iter().flat_map(Curve::points) {
            x = (x.0.min(px), x.1.max(px));
            y = (y.0.min(py), y.1.max(py));
        }

        Self {
            x: padded(x, padding),
            y: padded(y, padding),
        }
    }
}

/// Largest magnitude an axis bound may take; keeps `max - min` and the
/// padded span finite.
const AXIS_LIMIT: f64 = f64::MAX / 4.0;

fn padded((min, max): (f64, f64), padding: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let (min, max) = (min.clamp(-AXIS_LIMIT, AXIS_LIMIT), max.clamp(-AXIS_LIMIT, AXIS_LIMIT));
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        let delta = (max.abs() * 1e-3).max(1.0);
        return (min - delta)..(max + delta);
    }

    let (lo, hi) = (min - span * padding, max + span * padding);
    if lo.is_finite() && hi.is_finite() && (hi - lo).is_finite() {
        lo..hi
    } else {
        min..max
    }
}

/// Display configuration for one chart.
#[derive(Debug, Clone, Default)]
pub struct PlotRequest {
    /// Chart title; empty for none.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Legend label per curve.
    pub curve_labels: Vec<String>,
    /// Style per curve.
    pub styles: Vec<SeriesStyle>,
    /// Fixed axis bounds; computed from the data when `None`.
    pub range: Option<PlotRange>,
    /// Output path without extension.
    pub fig_name: PathBuf,
    /// Announce the written image.
    pub show: bool,
}

impl PlotRequest {
    /// Check that labels and styles line up with `curves` curves.
    pub fn validate(&self, curves: usize) -> Result<()> {
        if self.curve_labels.len() != curves || self.styles.len() != curves {
            return Err(PlotError::LabelMismatch {
                curves,
                labels: self.curve_labels.len(),
                styles: self.styles.len(),
            });
        }
        Ok(())
    }

    /// Image path for the given extension.
    pub fn output_path(&self, extension: &str) -> PathBuf {
        let mut name = OsString::from(self.fig_name.as_os_str());
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    }
}

/// Figure name for an input file: the same path with its extension removed.
pub fn fig_name_for(input: &Path) -> PathBuf {
    input.with_extension("")
}

/// Something that can draw curves to an image file.
pub trait PlotBackend {
    /// Image file extension written by this backend.
    fn extension(&self) -> &'static str;

    /// Draw one curve and return the written path.
    fn plot_single_curve(&mut self, curve: &Curve, request: &PlotRequest) -> Result<PathBuf>;

    /// Draw several curves on shared axes and return the written path.
    fn plot_multiple_curves(&mut self, curves: &[Curve], request: &PlotRequest)
        -> Result<PathBuf>;
}
