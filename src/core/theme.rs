use crate::core::color::Color;
use crate::core::palette;

/**
 * A display theme: the background/foreground pair a preview is rendered
 * against, plus the default color cycle that the `native` palette reads
 * back. Each theme also owns the fixed file stem its rendering is saved
 * under, so a run always overwrites the same three files.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    Transparent,
}

// Default line-color cycle of the dark theme. The light cycle is the
// standard ten-color chart palette, shared with the registry.
const DARK_CYCLE: &[&str] = &[
    "#8dd3c7", "#feffb3", "#bfbbd9", "#fa8174", "#81b1d2", "#fdb462", "#b3de69", "#bc82bd",
    "#ccebc4", "#ffed6f",
];

impl Theme {
    /// Every theme, in the order the compositor concatenates them.
    pub fn all() -> [Theme; 3] {
        [Theme::Light, Theme::Dark, Theme::Transparent]
    }

    pub fn background(&self) -> Color {
        match self {
            Theme::Light => Color::new(1.0, 1.0, 1.0, 1.0),
            Theme::Dark => Color::new(0.0, 0.0, 0.0, 1.0),
            Theme::Transparent => Color::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Used for the swatch label; mid-gray on the transparent theme so the
    /// text stays legible over either a light or a dark backdrop.
    pub fn foreground(&self) -> Color {
        match self {
            Theme::Light => Color::new(0.0, 0.0, 0.0, 1.0),
            Theme::Dark => Color::new(1.0, 1.0, 1.0, 1.0),
            Theme::Transparent => Color::new(0.5, 0.5, 0.5, 1.0),
        }
    }

    /// Default color cycle, one entry per line style slot.
    pub fn default_cycle(&self) -> Vec<Color> {
        let codes = match self {
            Theme::Dark => DARK_CYCLE,
            Theme::Light | Theme::Transparent => palette::TAB10,
        };
        codes
            .iter()
            .map(|code| Color::from_hex(code).expect("theme cycle hex codes are valid"))
            .collect()
    }

    /// Fixed name of the intermediate rendering for this theme.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Theme::Light => "white",
            Theme::Dark => "black",
            Theme::Transparent => "transparent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stems_are_distinct_and_fixed() {
        assert_eq!(Theme::Light.file_stem(), "white");
        assert_eq!(Theme::Dark.file_stem(), "black");
        assert_eq!(Theme::Transparent.file_stem(), "transparent");
    }

    #[test]
    fn test_backgrounds() {
        assert_eq!(Theme::Light.background().pixel(), image::Rgba([255, 255, 255, 255]));
        assert_eq!(Theme::Dark.background().pixel(), image::Rgba([0, 0, 0, 255]));
        assert_eq!(Theme::Transparent.background().pixel()[3], 0);
    }

    #[test]
    fn test_default_cycles_are_non_empty_and_theme_specific() {
        for theme in Theme::all() {
            assert!(!theme.default_cycle().is_empty());
        }
        assert_ne!(Theme::Light.default_cycle(), Theme::Dark.default_cycle());
        assert_eq!(
            Theme::Light.default_cycle(),
            Theme::Transparent.default_cycle()
        );
    }
}
