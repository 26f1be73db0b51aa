//! stepplot - plots for potential-step simulation output.
//!
//! stepplot reads the comma-delimited tables written by a one-dimensional
//! potential-step solver and renders them as SVG line charts.
//!
//! # Features
//!
//! - Wavefunction plot (real part, imaginary part, probability density)
//! - Transmission/reflection probability plot against E / V
//! - Automatic single-curve or multi-curve layout from the column count
//! - Cycled line and marker styles
//!
//! # Example
//!
//! ```ignore
//! use stepplot::dispatch::Dispatcher;
//! use stepplot::plot::SvgPlotter;
//!
//! let mut dispatcher = Dispatcher::new(".", SvgPlotter::default());
//! let path = dispatcher.render_wavefunction_plot()?;
//! println!("Wrote {}", path.display());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod data;
pub mod dispatch;
pub mod error;
pub mod plot;

pub use error::{PlotError, Result};
