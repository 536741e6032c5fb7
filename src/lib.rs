//! Preview images for chart color palettes.
//!
//! Each palette is rendered as a three-panel figure (sigmoid curves, a
//! gradient swatch, and colored text samples) under light, dark, and
//! transparent themes; the themed renderings are then concatenated
//! side by side into one composite image for visual comparison.

pub mod cli;
pub mod core;
