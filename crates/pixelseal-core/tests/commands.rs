use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

use pixelseal_core::commands::{capacity, hide, unveil, unveil_raw};
use pixelseal_core::secret::{BINARY_FILE_NAME, TEXT_FILE_NAME};
use pixelseal_core::PixelSealError;

fn write_rgba_carrier(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("carrier.png");
    RgbaImage::from_fn(48, 32, |x, y| Rgba([x as u8, y as u8, (x ^ y) as u8, 200]))
        .save(&path)
        .expect("Failed to write carrier");

    path
}

#[test]
fn should_hide_and_unveil_a_message_through_png_files() {
    let out_dir = TempDir::new().unwrap();
    let carrier = write_rgba_carrier(out_dir.path());
    let stego = out_dir.path().join("stego.png");

    let written = hide(
        &carrier,
        &stego,
        None,
        Some("Welcome to a Text Only Secret Message".to_string()),
        Some("Secret42".to_string()),
    )
    .unwrap();
    assert_eq!(written, stego);

    let unveiled = unveil(&stego, out_dir.path(), Some("Secret42".to_string())).unwrap();
    assert_eq!(unveiled, out_dir.path().join(TEXT_FILE_NAME));
    assert_eq!(
        fs::read_to_string(unveiled).unwrap(),
        "Welcome to a Text Only Secret Message"
    );

    // the written carrier has no alpha channel anymore
    let reloaded = image::open(&stego).unwrap();
    assert_eq!(reloaded.color(), image::ColorType::Rgb8);
}

#[test]
fn should_hide_and_unveil_a_binary_file() {
    let out_dir = TempDir::new().unwrap();
    let carrier = write_rgba_carrier(out_dir.path());
    let secret_file = out_dir.path().join("random.bin");
    let secret: Vec<u8> = (0..300u32).map(|i| (i * 97 % 251) as u8).collect();
    fs::write(&secret_file, &secret).unwrap();

    let stego = hide(
        &carrier,
        out_dir.path(),
        Some(secret_file),
        None,
        Some("pw".to_string()),
    )
    .unwrap();

    let target_dir = TempDir::new().unwrap();
    let unveiled = unveil(&stego, target_dir.path(), Some("pw".to_string())).unwrap();

    assert_eq!(unveiled, target_dir.path().join(BINARY_FILE_NAME));
    assert_eq!(fs::read(unveiled).unwrap(), secret);
}

#[test]
fn should_keep_wrong_password_and_corruption_indistinguishable() {
    let out_dir = TempDir::new().unwrap();
    let carrier = write_rgba_carrier(out_dir.path());
    let stego = out_dir.path().join("stego.png");
    hide(&carrier, &stego, None, Some("hi".into()), Some("pw".into())).unwrap();

    let wrong_password = unveil(&stego, out_dir.path(), Some("nope".into())).unwrap_err();

    let mut corrupted = image::open(&stego).unwrap().to_rgb8();
    // first channel behind prefix, salt and nonce
    let index = 32 + 28 * 8;
    let pixel = corrupted.get_pixel_mut(((index / 3) % 48) as u32, ((index / 3) / 48) as u32);
    pixel.0[index % 3] ^= 1;
    corrupted.save(&stego).unwrap();
    let corruption = unveil(&stego, out_dir.path(), Some("pw".into())).unwrap_err();

    assert!(matches!(wrong_password, PixelSealError::Authentication));
    assert!(matches!(corruption, PixelSealError::Authentication));
    assert_eq!(wrong_password.to_string(), corruption.to_string());
}

#[test]
fn should_dump_the_raw_envelope() {
    let out_dir = TempDir::new().unwrap();
    let carrier = write_rgba_carrier(out_dir.path());
    let stego = out_dir.path().join("stego.png");
    hide(&carrier, &stego, None, Some("hi".into()), Some("pw".into())).unwrap();

    let raw = out_dir.path().join("raw.bin");
    unveil_raw(&stego, &raw).unwrap();

    let envelope = fs::read(raw).unwrap();
    assert_eq!(envelope.len(), 2 + pixelseal_cipher::ENVELOPE_OVERHEAD);
}

#[test]
fn should_report_the_capacity_of_a_carrier() {
    let out_dir = TempDir::new().unwrap();
    let path = out_dir.path().join("plain.bmp");
    RgbImage::from_pixel(100, 10, Rgb([1, 2, 3]))
        .save(&path)
        .unwrap();

    let report = capacity(&path).unwrap();

    assert_eq!((report.width, report.height), (100, 10));
    assert_eq!(report.capacity, 375);
    assert_eq!(report.max_secret_len, 375 - 4 - 44);
}

#[test]
fn should_refuse_unsupported_media() {
    let out_dir = TempDir::new().unwrap();
    let path = out_dir.path().join("audio.wav");
    fs::write(&path, b"RIFF").unwrap();

    assert!(matches!(capacity(&path), Err(PixelSealError::UnsupportedMedia)));
}
