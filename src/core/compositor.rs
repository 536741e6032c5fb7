use image::{imageops, RgbaImage};
use std::path::Path;

use crate::core::file_io::save_image;

/**
 * Concatenates the input images left-to-right: the canvas width is the
 * sum of the input widths and the height is the maximum input height.
 * Inputs are pasted top-aligned at the cumulative x-offset of everything
 * placed before them; the canvas starts fully transparent, so a shorter
 * input leaves a transparent band below itself.
 *
 * An empty input list is a precondition violation.
 */
pub fn composite(images: &[RgbaImage]) -> RgbaImage {
    assert!(!images.is_empty(), "composite requires at least one input image");

    let total_width: u32 = images.iter().map(|image| image.width()).sum();
    let max_height = images.iter().map(|image| image.height()).max().unwrap();

    let mut canvas = RgbaImage::new(total_width, max_height);
    let mut x_offset: i64 = 0;
    for image in images {
        imageops::replace(&mut canvas, image, x_offset, 0);
        x_offset += image.width() as i64;
    }
    canvas
}

/**
 * Opens each input path, composites them in order, and saves the result.
 * A missing or unreadable input fails the whole operation before any
 * output is written; an existing output file is overwritten silently.
 */
pub fn combine<P: AsRef<Path>>(
    input_paths: &[P],
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut images = Vec::with_capacity(input_paths.len());
    for path in input_paths {
        images.push(image::open(path)?.into_rgba8());
    }
    save_image(&composite(&images), output_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, pixel: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, pixel)
    }

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn test_width_is_sum_and_height_is_max() {
        let canvas = composite(&[solid(3, 5, RED), solid(4, 2, BLUE)]);
        assert_eq!(canvas.dimensions(), (7, 5));
    }

    #[test]
    fn test_equal_heights_are_preserved_exactly() {
        let inputs = vec![solid(2, 6, RED), solid(3, 6, BLUE), solid(1, 6, RED)];
        let canvas = composite(&inputs);
        assert_eq!(canvas.dimensions(), (6, 6));
    }

    #[test]
    fn test_inputs_are_pasted_in_order_and_unchanged() {
        let canvas = composite(&[solid(3, 4, RED), solid(2, 4, BLUE)]);
        for y in 0..4 {
            for x in 0..3 {
                assert_eq!(*canvas.get_pixel(x, y), RED);
            }
            for x in 3..5 {
                assert_eq!(*canvas.get_pixel(x, y), BLUE);
            }
        }
    }

    #[test]
    fn test_opaque_input_survives_a_transparent_neighbor() {
        let canvas = composite(&[solid(2, 3, CLEAR), solid(2, 3, RED)]);
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(*canvas.get_pixel(x, y), CLEAR);
            }
            for x in 2..4 {
                assert_eq!(*canvas.get_pixel(x, y), RED);
            }
        }
    }

    #[test]
    fn test_shorter_input_leaves_a_transparent_band() {
        let canvas = composite(&[solid(2, 4, RED), solid(2, 2, BLUE)]);
        assert_eq!(canvas.dimensions(), (4, 4));
        // Top-aligned paste.
        assert_eq!(*canvas.get_pixel(2, 0), BLUE);
        assert_eq!(*canvas.get_pixel(2, 1), BLUE);
        // Below the shorter input the canvas stays transparent.
        assert_eq!(*canvas.get_pixel(2, 2), CLEAR);
        assert_eq!(*canvas.get_pixel(3, 3), CLEAR);
    }

    #[test]
    fn test_single_input_is_the_identity() {
        let input = solid(5, 3, BLUE);
        let canvas = composite(std::slice::from_ref(&input));
        assert_eq!(canvas.dimensions(), input.dimensions());
        assert_eq!(canvas.as_raw(), input.as_raw());
    }

    #[test]
    fn test_composition_is_deterministic() {
        let inputs = vec![solid(3, 5, RED), solid(4, 2, BLUE)];
        let first = composite(&inputs);
        let second = composite(&inputs);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    #[should_panic(expected = "at least one input image")]
    fn test_empty_input_list_is_rejected() {
        composite(&[]);
    }

    #[test]
    fn test_combine_fails_on_missing_input_without_writing_output() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let output = dir.path().join("combined.png");

        let result = combine(&[missing], &output);
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
