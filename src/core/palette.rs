use crate::core::color::{Color, ColorParseError};
use crate::core::theme::Theme;

/**
 * A named, ordered list of colors. Order is significant: it fixes the
 * stacking of the preview's curves, the band order of the gradient
 * swatch, and the left-to-right order of the text samples. Palettes are
 * immutable once constructed and never empty.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    colors: Vec<Color>,
}

/// The ten fixed colors of the `custom1` chart palette.
pub const CUSTOM1: &[&str] = &[
    "#1c90d4", "#ad0026", "#530fff", "#429900", "#d55e00", "#ff47ac", "#42baff", "#009e73",
    "#fff133", "#0072b2",
];

/// The standard ten-color chart cycle ("tab10").
pub const TAB10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Okabe & Ito colorblind-safe palette (8 colors).
pub const OKABE_ITO: &[&str] = &[
    "#e69f00", "#56b4e9", "#009e73", "#f0e442", "#0072b2", "#d55e00", "#cc79a7", "#000000",
];

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Palette {
        assert!(!colors.is_empty(), "palette must contain at least one color");
        Palette {
            name: name.into(),
            colors,
        }
    }

    pub fn from_hex_strings<S: AsRef<str>>(
        name: impl Into<String>,
        codes: &[S],
    ) -> Result<Palette, ColorParseError> {
        let colors = codes
            .iter()
            .map(|code| Color::from_hex(code.as_ref()))
            .collect::<Result<Vec<Color>, ColorParseError>>()?;
        Ok(Palette::new(name, colors))
    }

    /// The theme-adaptive palette: whatever color cycle the given theme
    /// would use for ordinary line plots.
    pub fn native(theme: Theme) -> Palette {
        Palette::new("native", theme.default_cycle())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Names accepted by `resolve`, in default-run order.
pub fn builtin_names() -> &'static [&'static str] {
    &["custom1", "tab10", "okabe-ito", "native"]
}

/// Looks up a registry palette. The theme only matters for `native`,
/// which reads back the theme's own default cycle.
pub fn resolve(name: &str, theme: Theme) -> Option<Palette> {
    let from_table = |codes: &[&str]| {
        Palette::from_hex_strings(name, codes).expect("built-in palette hex codes are valid")
    };
    match name {
        "custom1" => Some(from_table(CUSTOM1)),
        "tab10" => Some(from_table(TAB10)),
        "okabe-ito" => Some(from_table(OKABE_ITO)),
        "native" => Some(Palette::native(theme)),
        _ => None,
    }
}
