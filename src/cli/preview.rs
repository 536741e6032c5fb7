use serde::{Deserialize, Serialize};

use crate::core::color_map::GradientStyle;
use crate::core::compositor;
use crate::core::file_io::{build_output_directory, maybe_date_time_string, save_image, FilePrefix};
use crate::core::palette::{self, Palette};
use crate::core::panels::{render_preview, PREVIEW_RESOLUTION};
use crate::core::theme::Theme;

type PreviewResult = Result<(), Box<dyn std::error::Error>>;

/**
 * Complete set of parameters fed in from the JSON for the `custom`
 * subcommand. A copy is written next to the rendered output.
 */
#[derive(Serialize, Deserialize, Debug)]
pub struct PalettePreviewParams {
    pub name: String,
    pub colors: Vec<String>,
    #[serde(default)]
    pub gradient: GradientStyle,
}

/**
 * Renders the palette under every theme to its fixed-name file
 * (`white.png`, `black.png`, `transparent.png`), then concatenates the
 * themed renderings left-to-right into `<name>.png`. The palette is
 * resolved per theme so the theme-adaptive `native` palette can read
 * each theme's own default cycle.
 */
fn render_all_themes<F>(resolve: F, style: GradientStyle, file_prefix: &FilePrefix) -> PreviewResult
where
    F: Fn(Theme) -> Palette,
{
    let mut themed_paths = Vec::new();
    for theme in Theme::all() {
        let image = render_preview(&resolve(theme), theme, style, PREVIEW_RESOLUTION);
        let path = file_prefix.themed_path(theme.file_stem());
        save_image(&image, &path)?;
        themed_paths.push(path);
    }
    compositor::combine(&themed_paths, &file_prefix.with_suffix(".png"))
}

pub fn preview_named(name: &str, date_time_out: bool) -> PreviewResult {
    // Resolve once up front so an unknown name fails before any file is written.
    if palette::resolve(name, Theme::Light).is_none() {
        return Err(format!("unknown palette: {} (see the `list` subcommand)", name).into());
    }

    let file_prefix = FilePrefix {
        directory_path: build_output_directory(name, &maybe_date_time_string(date_time_out)),
        file_base: name.to_owned(),
    };

    render_all_themes(
        |theme| palette::resolve(name, theme).expect("registry name checked above"),
        GradientStyle::Listed,
        &file_prefix,
    )
}

pub fn preview_custom(params_path: &str, date_time_out: bool) -> PreviewResult {
    let params: PalettePreviewParams =
        serde_json::from_str(&std::fs::read_to_string(params_path)?)?;
    let palette = Palette::from_hex_strings(&params.name, &params.colors)?;

    let file_prefix = FilePrefix {
        directory_path: build_output_directory(
            &params.name,
            &maybe_date_time_string(date_time_out),
        ),
        file_base: params.name.clone(),
    };

    std::fs::write(
        file_prefix.with_suffix(".json"),
        serde_json::to_string(&params)?,
    )?;

    render_all_themes(|_| palette.clone(), params.gradient, &file_prefix)
}

/// The no-subcommand behavior: preview every registry palette.
pub fn run_default_sequence() -> PreviewResult {
    println!("{}", "#".repeat(80));
    for name in palette::builtin_names() {
        preview_named(name, false)?;
    }
    Ok(())
}

pub fn list_palettes() {
    for name in palette::builtin_names() {
        println!("{}", name);
    }
}
