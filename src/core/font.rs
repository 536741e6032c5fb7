use image::RgbaImage;

/**
 * Minimal embedded 5x7 bitmap font, enough to label gradient swatches
 * with palette names and to stamp hex codes under the text samples.
 * Glyphs cover A-Z, 0-9, '#', '-', and space; lowercase input maps onto
 * the uppercase shapes, anything else renders as a blank cell.
 */
pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1; // one column of spacing

// One byte per row, bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_HEIGHT as usize];

const BLANK: Glyph = [0; 7];

#[rustfmt::skip]
fn glyph(ch: char) -> &'static Glyph {
    match ch.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '#' => &[0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => &BLANK,
    }
}

/// Rendered width in pixels; the trailing spacing column is not counted.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        0
    } else {
        scale * (count * GLYPH_ADVANCE - 1)
    }
}

pub fn text_height(scale: u32) -> u32 {
    scale * GLYPH_HEIGHT
}

/**
 * Stamps `text` onto the image with its top-left corner at (x, y),
 * scaled up by integer pixel replication. Pixels that fall outside the
 * image bounds are silently clipped.
 */
pub fn draw_text(
    image: &mut RgbaImage,
    text: &str,
    x: i32,
    y: i32,
    scale: u32,
    pixel: image::Rgba<u8>,
) {
    assert!(scale > 0, "text scale must be positive");
    for (index, ch) in text.chars().enumerate() {
        let glyph_x = x + (index as u32 * GLYPH_ADVANCE * scale) as i32;
        let rows = glyph(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                // Replicate this font pixel into a scale-by-scale block.
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = glyph_x + (col * scale + dx) as i32;
                        let py = y + (row as u32 * scale + dy) as i32;
                        if px >= 0 && py >= 0 {
                            if let Some(target) = image.get_pixel_mut_checked(px as u32, py as u32)
                            {
                                *target = pixel;
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 1), 11);
        assert_eq!(text_width("AB", 2), 22);
        assert_eq!(text_height(2), 14);
    }

    #[test]
    fn test_lowercase_maps_to_uppercase_shapes() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn test_unknown_glyphs_are_blank() {
        assert_eq!(glyph('?'), &BLANK);
        assert_eq!(glyph(' '), &BLANK);
    }

    #[test]
    fn test_draw_text_stamps_pixels() {
        let mut image = RgbaImage::new(16, 16);
        let red = image::Rgba([255, 0, 0, 255]);
        draw_text(&mut image, "-", 0, 0, 1, red);
        // The dash glyph is a single row across the middle.
        for col in 0..GLYPH_WIDTH {
            assert_eq!(*image.get_pixel(col, 3), red);
        }
        assert_eq!(*image.get_pixel(0, 0), image::Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_draw_text_clips_at_image_bounds() {
        let mut image = RgbaImage::new(4, 4);
        let white = image::Rgba([255, 255, 255, 255]);
        // Partially and fully out of bounds; must not panic.
        draw_text(&mut image, "##", -3, -3, 2, white);
        draw_text(&mut image, "A", 100, 100, 1, white);
    }
}
