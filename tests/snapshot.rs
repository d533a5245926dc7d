//! PNG snapshot export against real files

use jellyfield::board::block::Color;
use jellyfield::board::grid::Board;
use jellyfield::board::shape::ShapeTemplate;
use jellyfield::io::configuration::SNAPSHOT_SCALE;
use jellyfield::io::snapshot::export_board_as_png;
use tempfile::TempDir;

fn sample_board() -> Board {
    let mut board = Board::new(3, 2).unwrap();
    board
        .place(
            &ShapeTemplate::composite_square([
                Color::Red,
                Color::Blue,
                Color::Green,
                Color::Yellow,
            ]),
            [0, 0],
        )
        .unwrap();
    board
}

#[test]
fn test_export_writes_scaled_png() {
    let board = sample_board();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.png");

    export_board_as_png(&board, path.to_str().unwrap()).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.width(), 3 * 2 * SNAPSHOT_SCALE);
    assert_eq!(img.height(), 2 * 2 * SNAPSHOT_SCALE);

    // Board y points up: unit 0 of cell (0, 0) lands at the image's
    // bottom-left corner, its low-y neighbors one scale-step up.
    let bottom = img.height() - 1;
    assert_eq!(*img.get_pixel(0, bottom), image::Rgba(Color::Red.rgba()));
    assert_eq!(
        *img.get_pixel(SNAPSHOT_SCALE, bottom),
        image::Rgba(Color::Blue.rgba())
    );
    assert_eq!(
        *img.get_pixel(0, bottom - SNAPSHOT_SCALE),
        image::Rgba(Color::Green.rgba())
    );
    assert_eq!(
        *img.get_pixel(SNAPSHOT_SCALE, bottom - SNAPSHOT_SCALE),
        image::Rgba(Color::Yellow.rgba())
    );

    // Empty cells render transparent
    assert_eq!(*img.get_pixel(img.width() - 1, 0), image::Rgba([0, 0, 0, 0]));
}

#[test]
fn test_export_creates_missing_parent_directories() {
    let board = sample_board();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("board.png");

    export_board_as_png(&board, path.to_str().unwrap()).unwrap();
    assert!(path.exists());
}
