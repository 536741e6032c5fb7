pub mod color;
pub mod color_map;
pub mod compositor;
pub mod file_io;
pub mod font;
pub mod palette;
pub mod panels;
pub mod theme;
