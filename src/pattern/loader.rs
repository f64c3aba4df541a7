//! Pattern assets: the embedded art and user supplied text or PNG files

use ndarray::Array2;
use std::path::Path;

use crate::io::configuration::DAYS_PER_WEEK;
use crate::io::error::{GraphArtError, Result};
use crate::pattern::grid::Pattern;
use crate::pattern::intensity::Intensity;

const BUILTIN_ART: &str = include_str!("../../assets/art.txt");

/// Pattern compiled into the binary
pub fn builtin() -> Pattern {
    Pattern::parse(BUILTIN_ART)
}

/// Load a pattern asset, choosing the decoder by file extension
///
/// `.png` files are converted pixel by pixel; anything else is read as text art.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The image cannot be decoded
/// - The asset contains no cells
pub fn load_pattern(path: &Path) -> Result<Pattern> {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    let pattern = if is_png {
        load_png(path)?
    } else {
        let text = std::fs::read_to_string(path).map_err(|e| GraphArtError::FileSystem {
            path: path.to_path_buf(),
            operation: "read pattern",
            source: e,
        })?;
        Pattern::parse(&text)
    };

    if pattern.cols() == 0 {
        return Err(GraphArtError::PatternLoad {
            path: path.to_path_buf(),
            reason: "pattern has no cells".to_string(),
        });
    }
    let unknown: usize = (0..pattern.rows())
        .filter_map(|stored_row| pattern.row_text(stored_row))
        .map(|text| {
            text.chars()
                .filter(|&symbol| Intensity::from_symbol(symbol).is_none())
                .count()
        })
        .sum();
    if unknown > 0 {
        tracing::warn!(
            path = %path.display(),
            unknown,
            "pattern has symbols outside the intensity alphabet, they paint as blank"
        );
    }
    if pattern.rows() as u64 != DAYS_PER_WEEK {
        tracing::warn!(
            path = %path.display(),
            rows = pattern.rows(),
            "pattern height differs from a week, extra rows are never reached"
        );
    }

    Ok(pattern)
}

// Darker and more opaque pixels get higher levels, transparent pixels stay blank
fn load_png(path: &Path) -> Result<Pattern> {
    let img = image::open(path).map_err(|e| GraphArtError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    let mut cells = Array2::from_elem((height as usize, width as usize), Intensity::Blank);
    for (x, y, pixel) in rgba_img.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let luminance =
            0.0722f64.mul_add(f64::from(b), 0.2126f64.mul_add(f64::from(r), 0.7152 * f64::from(g)))
                / 255.0;
        let ink = (1.0 - luminance) * f64::from(a) / 255.0;
        if let Some(cell) = cells.get_mut([y as usize, x as usize]) {
            *cell = Intensity::from_ink(ink);
        }
    }

    Ok(Pattern::from_intensities(&cells))
}
