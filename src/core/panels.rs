use image::RgbaImage;
use iter_num_tools::lin_space;
use more_asserts::assert_ge;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use crate::core::color_map::{color_mapper, GradientStyle};
use crate::core::font;
use crate::core::palette::Palette;
use crate::core::theme::Theme;

/// Fixed resolution of one themed rendering (width, height).
pub const PREVIEW_RESOLUTION: (u32, u32) = (640, 480);

// Data domain of the curves panel: sigmoids over t in [-10, 10], with
// headroom above the largest amplitude and below zero.
const CURVE_DOMAIN_T: [f32; 2] = [-10.0, 10.0];
const CURVE_DOMAIN_Y: [f32; 2] = [-0.1, 1.6];

// One sigmoid per palette color: inflection offsets spread over [-5, 5],
// amplitudes over [1.0, 1.5].
const SHIFT_RANGE: [f32; 2] = [-5.0, 5.0];
const AMPLITUDE_RANGE: [f32; 2] = [1.0, 1.5];
const CURVE_HALF_WIDTH_PIXELS: f32 = 1.5;

const OUTER_MARGIN: u32 = 10;
const PANEL_GAP: u32 = 6;
const LABEL_GUTTER: u32 = 120; // left band holding the swatch label
const LABEL_PAD: i32 = 8;
const LABEL_SCALE: u32 = 2;
const SAMPLE_SCALE: u32 = 1;

pub fn sigmoid(t: f32, t0: f32) -> f32 {
    1.0 / (1.0 + (-(t - t0)).exp())
}

/// `count` samples across `range`; a single sample sits at the range start.
fn evenly_spaced(range: [f32; 2], count: usize) -> Vec<f32> {
    if count == 1 {
        vec![range[0]]
    } else {
        lin_space(range[0]..=range[1], count).collect()
    }
}

/**
 * Maps a pixel index on [0, n-1] to a point in some data interval.
 * Passing the interval in descending order flips the axis, which is how
 * image rows (top-down) map onto plot coordinates (bottom-up).
 */
struct LinearPixelMap {
    offset: f32,
    slope: f32,
}

impl LinearPixelMap {
    fn new(n: u32, x0: f32, x1: f32) -> LinearPixelMap {
        assert!(n > 1, "pixel map needs at least two pixels");
        LinearPixelMap {
            offset: x0,
            slope: (x1 - x0) / ((n - 1) as f32),
        }
    }

    fn map(&self, index: u32) -> f32 {
        self.offset + self.slope * (index as f32)
    }

    fn step_size(&self) -> f32 {
        self.slope.abs()
    }
}

/// Vertical pixel band, `y1` exclusive.
#[derive(Debug, Clone, Copy)]
struct Band {
    y0: u32,
    y1: u32,
}

impl Band {
    fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/**
 * Vertical split of the figure into its three stacked panels, plus the
 * shared horizontal extent. The gutter on the left keeps all three
 * panels aligned and leaves room for the swatch label.
 */
struct PanelLayout {
    x0: u32,
    x1: u32,
    curves: Band,
    gradient: Band,
    text: Band,
}

impl PanelLayout {
    fn new(resolution: (u32, u32)) -> PanelLayout {
        let (width, height) = resolution;
        assert_ge!(width, 200);
        assert_ge!(height, 120);

        let curves = Band {
            y0: OUTER_MARGIN,
            y1: height * 70 / 100,
        };
        let gradient = Band {
            y0: curves.y1 + PANEL_GAP,
            y1: height * 85 / 100,
        };
        let text = Band {
            y0: gradient.y1 + PANEL_GAP,
            y1: height - OUTER_MARGIN,
        };

        PanelLayout {
            x0: LABEL_GUTTER,
            x1: width - OUTER_MARGIN,
            curves,
            gradient,
            text,
        }
    }

    fn panel_width(&self) -> u32 {
        self.x1 - self.x0
    }
}

/**
 * Rasterizes the full preview figure for one palette under one theme:
 * sigmoid curves on top, the gradient swatch with the palette's name in
 * the middle, and one hex-code text sample per color along the bottom.
 */
pub fn render_preview(
    palette: &Palette,
    theme: Theme,
    style: GradientStyle,
    resolution: (u32, u32),
) -> RgbaImage {
    let layout = PanelLayout::new(resolution);
    let mut image = RgbaImage::new(resolution.0, resolution.1);

    let background = theme.background().pixel();
    for (_, _, pixel) in image.enumerate_pixels_mut() {
        *pixel = background;
    }

    draw_curves(&mut image, palette, &layout);
    draw_gradient(&mut image, palette, theme, style, &layout);
    draw_text_samples(&mut image, palette, &layout);

    image
}

fn draw_curves(image: &mut RgbaImage, palette: &Palette, layout: &PanelLayout) {
    let band = layout.curves;
    let width = layout.panel_width();
    let height = band.height();

    let t_map = LinearPixelMap::new(width, CURVE_DOMAIN_T[0], CURVE_DOMAIN_T[1]);
    // Descending interval: row 0 is the top of the plot.
    let y_map = LinearPixelMap::new(height, CURVE_DOMAIN_Y[1], CURVE_DOMAIN_Y[0]);

    let count = palette.len();
    let shifts = evenly_spaced(SHIFT_RANGE, count);
    let amplitudes = evenly_spaced(AMPLITUDE_RANGE, count);
    let tolerance = CURVE_HALF_WIDTH_PIXELS * y_map.step_size();

    // Column-parallel rasterization: each pixel resolves to the topmost
    // curve passing within the line half-width, if any.
    let mut columns: Vec<Vec<Option<usize>>> = vec![vec![None; height as usize]; width as usize];
    columns.par_iter_mut().enumerate().for_each(|(col, column)| {
        let t = t_map.map(col as u32);
        column.iter_mut().enumerate().for_each(|(row, elem)| {
            let y = y_map.map(row as u32);
            // Later palette entries paint over earlier ones.
            *elem = (0..count)
                .rev()
                .find(|&i| (y - amplitudes[i] * sigmoid(t, shifts[i])).abs() <= tolerance);
        });
    });

    for (col, column) in columns.iter().enumerate() {
        for (row, entry) in column.iter().enumerate() {
            if let Some(index) = entry {
                image.put_pixel(
                    layout.x0 + col as u32,
                    band.y0 + row as u32,
                    palette.colors()[*index].pixel(),
                );
            }
        }
    }
}

fn draw_gradient(
    image: &mut RgbaImage,
    palette: &Palette,
    theme: Theme,
    style: GradientStyle,
    layout: &PanelLayout,
) {
    let band = layout.gradient;
    let width = layout.panel_width();
    let mapper = color_mapper(style, palette);
    let query_map = LinearPixelMap::new(width, 0.0, 1.0);

    for col in 0..width {
        let pixel = mapper.compute_pixel(query_map.map(col));
        for row in band.y0..band.y1 {
            image.put_pixel(layout.x0 + col, row, pixel);
        }
    }

    // Palette name, right-aligned against the swatch, vertically centered.
    let label = palette.name();
    let label_x = layout.x0 as i32 - LABEL_PAD - font::text_width(label, LABEL_SCALE) as i32;
    let label_y =
        band.y0 as i32 + (band.height() as i32 - font::text_height(LABEL_SCALE) as i32).max(0) / 2;
    font::draw_text(
        image,
        label,
        label_x,
        label_y,
        LABEL_SCALE,
        theme.foreground().pixel(),
    );
}

fn draw_text_samples(image: &mut RgbaImage, palette: &Palette, layout: &PanelLayout) {
    let band = layout.text;
    let slot = layout.panel_width() as f32 / (palette.len() as f32);
    let sample_y =
        band.y0 as i32 + (band.height() as i32 - font::text_height(SAMPLE_SCALE) as i32).max(0) / 2;

    for (index, color) in palette.colors().iter().enumerate() {
        let text = color.to_hex();
        let center = layout.x0 as f32 + slot * (index as f32 + 0.5);
        let sample_x = (center - 0.5 * font::text_width(&text, SAMPLE_SCALE) as f32).round() as i32;
        font::draw_text(image, &text, sample_x, sample_y, SAMPLE_SCALE, color.pixel());
    }
}
