//! SVG chart rendering with `plotters`.

use super::{
    Curve, LayoutConfig, Marker, MarkerConfig, PlotBackend, PlotRange, PlotRequest, SeriesStyle,
};
use crate::error::{PlotError, Result};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

type DrawError<DB> = DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>;

type DrawResult<DB> = std::result::Result<(), DrawError<DB>>;

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Writes charts as SVG files.
///
/// The SVG backend emits text elements directly, so no system fonts are
/// needed to render titles and labels.
#[derive(Debug, Clone, Default)]
pub struct SvgPlotter {
    layout: LayoutConfig,
}

impl SvgPlotter {
    fn render(&self, curves: &[Curve], request: &PlotRequest) -> Result<PathBuf> {
        request.validate(curves.len())?;

        let path = request.output_path(self.extension());
        let range = request
            .range
            .clone()
            .unwrap_or_else(|| PlotRange::enclosing(curves, self.layout.axis.padding_factor));
        let size = (self.layout.canvas.width, self.layout.canvas.height);

        // Draw in memory so a failed chart leaves nothing on disk
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
            draw_chart(&root, curves, request, &range, &self.layout)
                .map_err(|e| PlotError::render(&path, e))?;
            root.present().map_err(|e| PlotError::render(&path, e))?;
        }
        fs::write(&path, buffer)?;

        tracing::info!("Wrote {} ({} curves)", path.display(), curves.len());
        if request.show {
            println!("Wrote {}", path.display());
        }

        Ok(path)
    }
}

impl PlotBackend for SvgPlotter {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn plot_single_curve(&mut self, curve: &Curve, request: &PlotRequest) -> Result<PathBuf> {
        self.render(std::slice::from_ref(curve), request)
    }

    fn plot_multiple_curves(
        &mut self,
        curves: &[Curve],
        request: &PlotRequest,
    ) -> Result<PathBuf> {
        self.render(curves, request)
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curves: &[Curve],
    request: &PlotRequest,
    range: &PlotRange,
    layout: &LayoutConfig,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(layout.canvas.margin)
        .x_label_area_size(layout.axis.x_label_area)
        .y_label_area_size(layout.axis.y_label_area);
    if !request.title.is_empty() {
        builder.caption(&request.title, (layout.font.family, layout.font.caption_size));
    }
    let mut chart = builder.build_cartesian_2d(range.x.clone(), range.y.clone())?;

    chart
        .configure_mesh()
        .x_desc(request.x_label.as_str())
        .y_desc(request.y_label.as_str())
        .axis_desc_style((layout.font.family, layout.font.label_size))
        .draw()?;

    let legend_length = layout.marker.legend_length;
    for ((curve, label), style) in curves
        .iter()
        .zip(&request.curve_labels)
        .zip(&request.styles)
    {
        let color: RGBColor = style.color.into();
        let line_style = color.stroke_width(style.stroke_width);

        let series = chart.draw_series(LineSeries::new(curve.points(), line_style))?;
        if !label.is_empty() {
            series.label(label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + legend_length, y)], line_style)
            });
        }

        draw_markers(&mut chart, curve, style, &layout.marker)?;
    }

    if request.curve_labels.iter().any(|l| !l.is_empty()) {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font((layout.font.family, layout.font.label_size))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}

fn draw_markers<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    curve: &Curve,
    style: &SeriesStyle,
    markers: &MarkerConfig,
) -> DrawResult<DB> {
    let color: RGBColor = style.color.into();
    let size = markers.size;
    let points = curve.points().step_by(markers.stride(curve.len()));

    match style.marker {
        Marker::None => {}
        Marker::Circle => {
            chart.draw_series(points.map(|p| Circle::new(p, size, color.filled())))?;
        }
        Marker::Triangle => {
            chart.draw_series(points.map(|p| TriangleMarker::new(p, size, color.filled())))?;
        }
        Marker::Cross => {
            let stroke = color.stroke_width(style.stroke_width);
            chart.draw_series(points.map(|p| Cross::new(p, size, stroke)))?;
        }
    }

    Ok(())
}
