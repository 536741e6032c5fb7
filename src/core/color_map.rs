use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::palette::Palette;

/**
 * Maps a query on [0, 1] to a pixel. Implemented by the two ways a
 * discrete palette can be read as a color map: piecewise-constant bands
 * (the classic "listed" colormap) and piecewise-linear blending between
 * neighboring entries. Queries outside [0, 1] clamp to the end entries.
 */
pub trait ColorMapper {
    fn compute_pixel(&self, query: f32) -> image::Rgba<u8>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientStyle {
    #[default]
    Listed,
    Smooth,
}

pub fn color_mapper(style: GradientStyle, palette: &Palette) -> Box<dyn ColorMapper> {
    match style {
        GradientStyle::Listed => Box::new(ListedColorMap::new(palette)),
        GradientStyle::Smooth => Box::new(SmoothColorMap::new(palette)),
    }
}

/// N equal-width constant bands, one per palette entry, in palette order.
pub struct ListedColorMap {
    colors: Vec<Color>,
}

impl ListedColorMap {
    pub fn new(palette: &Palette) -> ListedColorMap {
        ListedColorMap {
            colors: palette.colors().to_vec(),
        }
    }
}

impl ColorMapper for ListedColorMap {
    fn compute_pixel(&self, query: f32) -> image::Rgba<u8> {
        let count = self.colors.len();
        let index = (query.clamp(0.0, 1.0) * (count as f32)) as usize;
        self.colors[index.min(count - 1)].pixel()
    }
}

/// Linear RGBA interpolation between evenly spaced palette entries.
pub struct SmoothColorMap {
    colors: Vec<Color>,
}

impl SmoothColorMap {
    pub fn new(palette: &Palette) -> SmoothColorMap {
        SmoothColorMap {
            colors: palette.colors().to_vec(),
        }
    }
}

impl ColorMapper for SmoothColorMap {
    fn compute_pixel(&self, query: f32) -> image::Rgba<u8> {
        let count = self.colors.len();
        if count == 1 {
            return self.colors[0].pixel();
        }
        let scaled = query.clamp(0.0, 1.0) * ((count - 1) as f32);
        let index = (scaled as usize).min(count - 2);
        let alpha = scaled - (index as f32);
        self.colors[index].lerp(&self.colors[index + 1], alpha).pixel()
    }
}
