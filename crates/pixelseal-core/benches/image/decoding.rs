use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, RgbImage};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let cover = DynamicImage::ImageRgb8(RgbImage::from_fn(512, 512, |x, y| {
            image::Rgb([x as u8, y as u8, (x ^ y) as u8])
        }));
        let payload = vec![0x5a; 64 * 1024];
        let stego = DynamicImage::ImageRgb8(
            pixelseal_core::embed(&cover, &payload).expect("Cannot embed payload"),
        );

        b.iter(|| pixelseal_core::extract(&stego).expect("Cannot extract payload"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
