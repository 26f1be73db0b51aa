//! Wavefunction solution plot.

use super::{base_request, dependent_curves, derive_labels, PlotPlan, Regime, SeriesMode};
use crate::data::Dataset;
use crate::error::{PlotError, Result};
use crate::plot::{style_for, styles_for, Curve};

/// Input file name.
pub const FILE_NAME: &str = "Step_Solution_E_gr_V.txt";

/// Names of the dependent series, in file column order.
pub const LABELS: [&str; 3] = ["real part", "imaginary part", "probability density"];

/// Label used when the file holds a single dependent series.
pub const SINGLE_LABEL: &str = "wavefunction";

const X_LABEL: &str = "Position (μm)";
const Y_LABEL: &str = "ψ(x)";

/// Build the chart for a wavefunction dataset.
///
/// Two series give a single curve; more give one curve per dependent series
/// with styles cycled from the palette.
pub fn plan(dataset: &Dataset, regime: Regime, show: bool) -> Result<PlotPlan> {
    let mut request = base_request(dataset, show);
    request.x_label = X_LABEL.to_string();
    request.y_label = Y_LABEL.to_string();

    match SeriesMode::of(dataset) {
        Some(SeriesMode::Multi(count)) => {
            request.title = regime.title().to_string();
            request.curve_labels = derive_labels(&LABELS, count);
            request.styles = styles_for(count);
            if count > LABELS.len() {
                tracing::warn!(
                    "{} has {} dependent series; extra series get numbered labels",
                    dataset.name(),
                    count
                );
            }
            Ok(PlotPlan::Multi {
                curves: dependent_curves(dataset),
                request,
            })
        }
        Some(SeriesMode::Single) => {
            request.curve_labels = vec![SINGLE_LABEL.to_string()];
            request.styles = vec![style_for(0)];
            let (Some(x), Some(y)) = (dataset.independent(), dataset.series(1)) else {
                return Err(PlotError::shape(dataset.name(), 2, dataset.series_count()));
            };
            let curve = Curve::new(x.to_vec(), y.to_vec());
            Ok(PlotPlan::Single { curve, request })
        }
        None => Err(PlotError::shape(dataset.name(), 2, dataset.series_count())),
    }
}
