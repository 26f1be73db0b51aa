//! Line and marker styles cycled across curves.

use plotters::style::RGBColor;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

/// Marker drawn on top of a curve's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// Line only.
    #[default]
    None,
    /// Filled circle.
    Circle,
    /// Upward triangle.
    Triangle,
    /// Diagonal cross.
    Cross,
}

/// Visual style of one curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    /// Position in [`STYLE_PALETTE`].
    pub index: usize,
    /// Line and marker color.
    pub color: Rgb,
    /// Marker shape.
    pub marker: Marker,
    /// Line width in pixels.
    pub stroke_width: u32,
}

const fn entry(index: usize, color: Rgb, marker: Marker) -> SeriesStyle {
    SeriesStyle {
        index,
        color,
        marker,
        stroke_width: 2,
    }
}

/// Styles assigned to curves in order.
pub const STYLE_PALETTE: [SeriesStyle; 8] = [
    entry(0, Rgb(214, 39, 40), Marker::Circle),
    entry(1, Rgb(44, 160, 44), Marker::Triangle),
    entry(2, Rgb(31, 119, 180), Marker::Cross),
    entry(3, Rgb(148, 103, 189), Marker::Circle),
    entry(4, Rgb(23, 190, 207), Marker::Triangle),
    entry(5, Rgb(255, 127, 14), Marker::Cross),
    entry(6, Rgb(140, 86, 75), Marker::None),
    entry(7, Rgb(0, 0, 0), Marker::None),
];

/// Style for the curve at `index`, wrapping around the palette.
pub fn style_for(index: usize) -> SeriesStyle {
    style_in(&STYLE_PALETTE, index)
}

/// Style for `index` from an arbitrary non-empty palette.
pub fn style_in(palette: &[SeriesStyle], index: usize) -> SeriesStyle {
    palette[index % palette.len()]
}

/// Styles for `count` consecutive curves.
pub fn styles_for(count: usize) -> Vec<SeriesStyle> {
    (0..count).map(style_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_indices_match_positions() {
        for (i, style) in STYLE_PALETTE.iter().enumerate() {
            assert_eq!(style.index, i);
        }
    }

    #[test]
    fn styles_cycle_through_palette() {
        let len = STYLE_PALETTE.len();
        assert_eq!(style_for(0), style_for(len));
        assert_eq!(style_for(3).index, 3);
        assert_eq!(style_for(len + 2).index, 2);
    }

    #[test]
    fn short_palette_wraps() {
        let palette = [STYLE_PALETTE[0], STYLE_PALETTE[1]];
        let indices: Vec<usize> = (0..3).map(|i| style_in(&palette, i).index).collect();
        assert_eq!(indices, vec![0, 1, 0]);
    }

    #[test]
    fn first_three_styles_are_distinct() {
        let styles = styles_for(3);
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert_ne!(styles[0], styles[2]);
    }
}
