use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use palette_preview::cli::preview::{preview_custom, preview_named};
use palette_preview::core::color_map::GradientStyle;
use palette_preview::core::compositor::combine;
use palette_preview::core::file_io::save_image;
use palette_preview::core::palette;
use palette_preview::core::panels::{render_preview, PREVIEW_RESOLUTION};
use palette_preview::core::theme::Theme;

fn compute_file_hash(file_path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(fs::read(file_path).expect("unable to read file"));
    format!("{:x}", hasher.finalize())
}

/// Renders every theme of the palette into `dir` under the fixed stems,
/// returning the written paths in composition order.
fn render_themed_files(name: &str, dir: &Path) -> Vec<PathBuf> {
    let mut themed_paths = Vec::new();
    for theme in Theme::all() {
        let palette = palette::resolve(name, theme).unwrap();
        let image = render_preview(&palette, theme, GradientStyle::Listed, PREVIEW_RESOLUTION);
        let path = dir.join(format!("{}.png", theme.file_stem()));
        save_image(&image, &path).unwrap();
        themed_paths.push(path);
    }
    themed_paths
}

#[test]
fn test_composite_of_three_themed_renderings() {
    let dir = tempfile::tempdir().unwrap();
    let themed_paths = render_themed_files("custom1", dir.path());

    let output = dir.path().join("custom1.png");
    combine(&themed_paths, &output).unwrap();

    let composite = image::open(&output).unwrap().into_rgba8();
    assert_eq!(composite.width(), 3 * PREVIEW_RESOLUTION.0);
    assert_eq!(composite.height(), PREVIEW_RESOLUTION.1);
}

#[test]
fn test_composition_is_idempotent_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let themed_paths = render_themed_files("tab10", dir.path());

    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    combine(&themed_paths, &first).unwrap();
    combine(&themed_paths, &second).unwrap();

    assert_eq!(compute_file_hash(&first), compute_file_hash(&second));
}

#[test]
fn test_single_source_composite_matches_its_input_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let themed_paths = render_themed_files("okabe-ito", dir.path());

    let output = dir.path().join("single.png");
    combine(&themed_paths[0..1], &output).unwrap();

    let composite = image::open(&output).unwrap().into_rgba8();
    assert_eq!(composite.dimensions(), PREVIEW_RESOLUTION);
}

#[test]
fn test_preview_named_writes_fixed_names_and_composite() {
    preview_named("native", false).unwrap();

    let out_dir = Path::new("out/native");
    for stem in ["white", "black", "transparent", "native"] {
        let path = out_dir.join(format!("{}.png", stem));
        assert!(path.exists(), "missing output file: {}", path.display());
    }

    let composite = image::open(out_dir.join("native.png")).unwrap().into_rgba8();
    assert_eq!(composite.width(), 3 * PREVIEW_RESOLUTION.0);
    assert_eq!(composite.height(), PREVIEW_RESOLUTION.1);
}

#[test]
fn test_preview_custom_writes_renderings_and_params_copy() {
    let dir = tempfile::tempdir().unwrap();
    let params_path = dir.path().join("duotone.json");
    fs::write(
        &params_path,
        r##"{ "name": "duotone", "colors": ["#1c90d4", "#d55e00"], "gradient": "smooth" }"##,
    )
    .unwrap();

    preview_custom(params_path.to_str().unwrap(), false).unwrap();

    let out_dir = Path::new("out/duotone");
    for file_name in [
        "white.png",
        "black.png",
        "transparent.png",
        "duotone.png",
        "duotone.json",
    ] {
        let path = out_dir.join(file_name);
        assert!(path.exists(), "missing output file: {}", path.display());
    }

    let composite = image::open(out_dir.join("duotone.png")).unwrap().into_rgba8();
    assert_eq!(composite.width(), 3 * PREVIEW_RESOLUTION.0);
    assert_eq!(composite.height(), PREVIEW_RESOLUTION.1);

    // The params copy round-trips through serde unchanged in meaning.
    let copied: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("duotone.json")).unwrap()).unwrap();
    assert_eq!(copied["name"], "duotone");
    assert_eq!(copied["gradient"], "smooth");
    assert_eq!(copied["colors"].as_array().unwrap().len(), 2);
}

#[test]
fn test_preview_custom_rejects_bad_color_strings() {
    let dir = tempfile::tempdir().unwrap();
    let params_path = dir.path().join("broken.json");
    fs::write(
        &params_path,
        r##"{ "name": "broken", "colors": ["#1c90d4", "oops"] }"##,
    )
    .unwrap();

    assert!(preview_custom(params_path.to_str().unwrap(), false).is_err());
}

#[test]
fn test_unknown_palette_name_is_an_error() {
    assert!(preview_named("no-such-palette", false).is_err());
}
