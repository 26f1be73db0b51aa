//! Transmission/reflection probability plot.

use super::{base_request, dependent_curves, derive_labels, PlotPlan, SeriesMode};
use crate::data::Dataset;
use crate::error::{PlotError, Result};
use crate::plot::{styles_for, PlotRange};

/// Input file name.
pub const FILE_NAME: &str = "Step_Probabilities.txt";

/// Names of the dependent series, in file column order.
pub const LABELS: [&str; 2] = ["transmission", "reflection"];

/// Chart title.
pub const TITLE: &str = "Potential Step Transmission Reflection Probability";

/// Fixed axis bounds: E/V in [0, 2], probability in [0, 1].
pub fn range() -> PlotRange {
    PlotRange::new(0.0, 2.0, 0.0, 1.0)
}

/// Build the chart for a probability dataset.
///
/// Both transmission and reflection must be present, so the dataset needs
/// at least three series.
pub fn plan(dataset: &Dataset, show: bool) -> Result<PlotPlan> {
    let Some(SeriesMode::Multi(count)) = SeriesMode::of(dataset) else {
        return Err(PlotError::shape(dataset.name(), 3, dataset.series_count()));
    };

    let mut request = base_request(dataset, show);
    request.title = TITLE.to_string();
    request.x_label = "E / V".to_string();
    request.y_label = "Probability".to_string();
    request.curve_labels = derive_labels(&LABELS, count);
    request.styles = styles_for(count);
    request.range = Some(range());

    Ok(PlotPlan::Multi {
        curves: dependent_curves(dataset),
        request,
    })
}
