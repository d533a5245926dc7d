//! PNG export of the board's sub-cell view

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::board::Board;
use crate::board::block::Color;
use crate::engine::subgrid::VirtualGrid;
use crate::io::configuration::SNAPSHOT_SCALE;
use crate::io::error::{EngineError, Result};

/// Export the board as a PNG with one scaled square per sub-cell
///
/// Empty sub-cells render transparent. The board's y axis points up, so
/// rows are flipped into image space.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &Board, output_path: &str) -> Result<()> {
    let grid = VirtualGrid::from_board(board);
    let width = grid.width() as u32 * SNAPSHOT_SCALE;
    let height = grid.height() as u32 * SNAPSHOT_SCALE;

    let mut img = ImageBuffer::new(width, height);
    for (px, py, pixel) in img.enumerate_pixels_mut() {
        let vx = (px / SNAPSHOT_SCALE) as usize;
        let vy = grid
            .height()
            .saturating_sub(1 + (py / SNAPSHOT_SCALE) as usize);
        let rgba = grid.color_at([vx, vy]).map_or([0, 0, 0, 0], Color::rgba);
        *pixel = Rgba(rgba);
    }

    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| EngineError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create snapshot directory",
                source,
            })?;
        }
    }

    img.save(output_path).map_err(|source| EngineError::ImageExport {
        path: Path::new(output_path).to_path_buf(),
        source,
    })
}
