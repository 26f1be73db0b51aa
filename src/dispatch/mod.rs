//! Dataset plot dispatch.
//!
//! Loads a dataset by its fixed file name, decides between the single-curve
//! and multi-curve paths from the number of series, builds the
//! [`PlotRequest`], and hands the result to a [`PlotBackend`].

pub mod ratio;
pub mod wavefunction;

use crate::data::{DataReader, Dataset};
use crate::error::Result;
use crate::plot::{fig_name_for, Curve, PlotBackend, PlotRequest};
use std::path::PathBuf;

/// Rendering path chosen for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMode {
    /// One independent and one dependent series.
    Single,
    /// One independent series shared by this many dependent series.
    Multi(usize),
}

impl SeriesMode {
    /// Classify a dataset; `None` when it has fewer than two series.
    pub fn of(dataset: &Dataset) -> Option<Self> {
        match dataset.series_count() {
            0 | 1 => None,
            2 => Some(Self::Single),
            n => Some(Self::Multi(n - 1)),
        }
    }
}

/// Energy regime of the wavefunction solution, used for the chart title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Regime {
    /// Particle energy above the step height.
    #[default]
    Above,
    /// Particle energy below the step height.
    Below,
}

impl Regime {
    /// Chart title for this regime.
    pub fn title(self) -> &'static str {
        match self {
            Self::Above => "Wavefunction E > V",
            Self::Below => "Wavefunction E < V",
        }
    }
}

/// A fully configured chart, ready for a backend.
#[derive(Debug, Clone)]
pub enum PlotPlan {
    /// One curve.
    Single {
        /// The curve.
        curve: Curve,
        /// Display configuration.
        request: PlotRequest,
    },
    /// Several curves sharing an x axis.
    Multi {
        /// The curves, in series order.
        curves: Vec<Curve>,
        /// Display configuration.
        request: PlotRequest,
    },
}

impl PlotPlan {
    /// Display configuration.
    pub fn request(&self) -> &PlotRequest {
        match self {
            Self::Single { request, .. } | Self::Multi { request, .. } => request,
        }
    }

    /// Curves to draw.
    pub fn curves(&self) -> &[Curve] {
        match self {
            Self::Single { curve, .. } => std::slice::from_ref(curve),
            Self::Multi { curves, .. } => curves,
        }
    }

    /// Send the plan to a backend.
    pub fn render<P: PlotBackend + ?Sized>(&self, plotter: &mut P) -> Result<PathBuf> {
        match self {
            Self::Single { curve, request } => plotter.plot_single_curve(curve, request),
            Self::Multi { curves, request } => plotter.plot_multiple_curves(curves, request),
        }
    }
}

/// Labels for `count` curves: the known names in order, then `series N`
/// (1-based curve position) for any curves beyond them.
pub fn derive_labels(known: &[&str], count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match known.get(i) {
            Some(name) => (*name).to_string(),
            None => format!("series {}", i + 1),
        })
        .collect()
}

/// One curve per dependent series, each paired with series 0.
pub fn dependent_curves(dataset: &Dataset) -> Vec<Curve> {
    let Some(x) = dataset.independent() else {
        return Vec::new();
    };
    let x = x.to_vec();
    dataset
        .dependent()
        .map(|y| Curve::new(x.clone(), y.to_vec()))
        .collect()
}

/// Request skeleton with the figure name derived from the dataset path.
pub(crate) fn base_request(dataset: &Dataset, show: bool) -> PlotRequest {
    PlotRequest {
        fig_name: fig_name_for(&dataset.file_path),
        show,
        ..PlotRequest::default()
    }
}

/// Runs the plot operations against files in one directory.
#[derive(Debug)]
pub struct Dispatcher<P> {
    data_dir: PathBuf,
    plotter: P,
    regime: Regime,
    show: bool,
}

impl<P: PlotBackend> Dispatcher<P> {
    /// Create a dispatcher reading from `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>, plotter: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            plotter,
            regime: Regime::default(),
            show: true,
        }
    }

    /// Set the wavefunction regime.
    pub fn with_regime(mut self, regime: Regime) -> Self {
        self.regime = regime;
        self
    }

    /// Set whether written images are announced on stdout.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    #[cfg(test)]
    pub(crate) fn plotter(&self) -> &P {
        &self.plotter
    }

    /// Plot the wavefunction solution file.
    pub fn render_wavefunction_plot(&mut self) -> Result<PathBuf> {
        let dataset = self.load(wavefunction::FILE_NAME)?;
        let plan = wavefunction::plan(&dataset, self.regime, self.show)?;
        self.render(&plan)
    }

    /// Plot the transmission/reflection probability file.
    pub fn render_ratio_plot(&mut self) -> Result<PathBuf> {
        let dataset = self.load(ratio::FILE_NAME)?;
        let plan = ratio::plan(&dataset, self.show)?;
        self.render(&plan)
    }

    fn render(&mut self, plan: &PlotPlan) -> Result<PathBuf> {
        tracing::debug!(
            "Plotting {} curves to {}",
            plan.curves().len(),
            plan.request().fig_name.display()
        );
        plan.render(&mut self.plotter)
    }

    fn load(&self, file_name: &str) -> Result<Dataset> {
        let path = self.data_dir.join(file_name);
        tracing::debug!("Reading {}", path.display());
        DataReader::read_file(&path)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::error::Result;
    use crate::plot::{Curve, PlotBackend, PlotRequest};
    use std::path::PathBuf;

    /// A rendered call captured by [`RecordingPlotter`].
    #[derive(Debug, Clone)]
    pub(crate) struct Recorded {
        pub(crate) multi: bool,
        pub(crate) curves: Vec<Curve>,
        pub(crate) request: PlotRequest,
    }

    /// Backend that records calls instead of drawing.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingPlotter {
        pub(crate) calls: Vec<Recorded>,
    }

    impl PlotBackend for RecordingPlotter {
        fn extension(&self) -> &'static str {
            "rec"
        }

        fn plot_single_curve(&mut self, curve: &Curve, request: &PlotRequest) -> Result<PathBuf> {
            request.validate(1)?;
            self.calls.push(Recorded {
                multi: false,
                curves: vec![curve.clone()],
                request: request.clone(),
            });
            Ok(request.output_path(self.extension()))
        }

        fn plot_multiple_curves(
            &mut self,
            curves: &[Curve],
            request: &PlotRequest,
        ) -> Result<PathBuf> {
            request.validate(curves.len())?;
            self.calls.push(Recorded {
                multi: true,
                curves: curves.to_vec(),
                request: request.clone(),
            });
            Ok(request.output_path(self.extension()))
        }
    }
}
