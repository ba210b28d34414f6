use image::{GrayImage, Luma};
use radview_core::io::export::{save_frame, save_png};

fn gradient_frame(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([((x * 20 + y) % 256) as u8]))
}

#[test]
fn test_png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.png");
    let frame = gradient_frame(10, 6);

    save_png(&frame, &path).unwrap();

    let reloaded = image::open(&path).unwrap().to_luma8();
    assert_eq!((reloaded.width(), reloaded.height()), (10, 6));
    assert_eq!(reloaded.as_raw(), frame.as_raw());
}

#[test]
fn test_save_frame_picks_format_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let frame = gradient_frame(8, 8);

    let tif_path = dir.path().join("view.tif");
    save_frame(&frame, &tif_path).unwrap();
    let reloaded = image::open(&tif_path).unwrap().to_luma8();
    assert_eq!(reloaded.as_raw(), frame.as_raw());

    let png_path = dir.path().join("view.out");
    save_frame(&frame, &png_path).unwrap();
    // Unknown extension falls back to PNG content.
    let reloaded = image::load(
        std::io::BufReader::new(std::fs::File::open(&png_path).unwrap()),
        image::ImageFormat::Png,
    )
    .unwrap()
    .to_luma8();
    assert_eq!(reloaded.as_raw(), frame.as_raw());
}
