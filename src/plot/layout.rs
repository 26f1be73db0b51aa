//! Layout configuration constants for rendered charts.

/// Canvas size and outer margin.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Margin around the chart area.
    pub margin: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            margin: 20,
        }
    }
}

/// Axis label areas and auto-range behavior.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Height reserved below the chart for the x axis.
    pub x_label_area: u32,
    /// Width reserved left of the chart for the y axis.
    pub y_label_area: u32,
    /// Padding factor applied to auto-computed ranges (0.05 = 5% margin).
    pub padding_factor: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            x_label_area: 50,
            y_label_area: 70,
            padding_factor: 0.05,
        }
    }
}

/// Font sizes.
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Font family name.
    pub family: &'static str,
    /// Title size.
    pub caption_size: u32,
    /// Axis description and legend size.
    pub label_size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif",
            caption_size: 28,
            label_size: 18,
        }
    }
}

/// Marker drawing.
#[derive(Debug, Clone)]
pub struct MarkerConfig {
    /// Marker size in pixels.
    pub size: u32,
    /// Upper bound on markers drawn per curve; denser curves are thinned.
    pub max_markers: usize,
    /// Length of the legend line sample.
    pub legend_length: i32,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            size: 4,
            max_markers: 40,
            legend_length: 24,
        }
    }
}

impl MarkerConfig {
    /// Step between marked samples for a curve of `len` samples.
    pub fn stride(&self, len: usize) -> usize {
        if self.max_markers == 0 {
            return usize::MAX;
        }
        len.div_ceil(self.max_markers).max(1)
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Canvas settings.
    pub canvas: CanvasConfig,
    /// Axis settings.
    pub axis: AxisConfig,
    /// Font settings.
    pub font: FontConfig,
    /// Marker settings.
    pub marker: MarkerConfig,
}
