use image::RgbaImage;
use std::path::{Path, PathBuf};

/**
 * Output directory for one palette run: `out/<palette>[/<datetime>]`.
 * The directory is created on the spot; the fixed-name files inside it
 * are overwritten by every run unless the datetime subdirectory is
 * requested.
 */
pub fn build_output_directory(palette_name: &str, datetime: &Option<String>) -> PathBuf {
    let mut dirs = vec!["out", palette_name];
    if let Some(inner_datetime_str) = datetime {
        dirs.push(inner_datetime_str);
    }

    let directory_path: PathBuf = dirs.iter().collect();
    std::fs::create_dir_all(&directory_path).expect("Unable to create output directory");
    directory_path
}

pub fn date_time_string() -> String {
    use chrono::{Datelike, Local, Timelike};
    let local_time = Local::now();
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        local_time.year(),
        local_time.month(),
        local_time.day(),
        local_time.hour(),
        local_time.minute(),
        local_time.second()
    )
}

pub fn maybe_date_time_string(enable: bool) -> Option<String> {
    if enable {
        Some(date_time_string())
    } else {
        None
    }
}

/**
 * A directory and base name pair: the composite and the params copy use
 * the base name with a suffix, the per-theme renderings use fixed stems
 * inside the same directory.
 */
pub struct FilePrefix {
    pub directory_path: PathBuf,
    pub file_base: String,
}

impl FilePrefix {
    pub fn with_suffix(&self, suffix: &str) -> PathBuf {
        self.directory_path.join(self.file_base.clone() + suffix)
    }

    /// Path for a themed rendering, e.g. `white` -> `<dir>/white.png`.
    pub fn themed_path(&self, stem: &str) -> PathBuf {
        self.directory_path.join(String::from(stem) + ".png")
    }
}

pub fn save_image(image: &RgbaImage, path: &Path) -> Result<(), image::ImageError> {
    image.save(path)?;
    println!("INFO:  Wrote image file to: {}", path.display());
    Ok(())
}
