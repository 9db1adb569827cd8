//! Turns the UCD `EastAsianWidth.txt` into a 1024 x u64 bitmap of the
//! BMP code points that occupy two terminal columns.

pub mod apperr;
pub mod bitmap;
pub mod eaw;
pub mod emit;

use std::path::Path;

use crate::bitmap::{BuildStats, WidthBitmap};

/// Looked up in the current working directory when no path is given.
pub const DEFAULT_INPUT: &str = "EastAsianWidth.txt";

pub struct Table {
    pub bitmap: WidthBitmap,
    pub stats: BuildStats,
}

/// Parses `path` and folds it into a bitmap.
pub fn build_from_file(path: &Path) -> apperr::Result<Table> {
    let records = eaw::parse_file(path)?;
    let (bitmap, stats) = WidthBitmap::build(&records);
    Ok(Table { bitmap, stats })
}
