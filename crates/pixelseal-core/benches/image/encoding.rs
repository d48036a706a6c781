use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, RgbImage};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let cover = DynamicImage::ImageRgb8(RgbImage::from_fn(512, 512, |x, y| {
            image::Rgb([x as u8, y as u8, (x ^ y) as u8])
        }));
        let payload = vec![0x5a; 64 * 1024];

        b.iter(|| pixelseal_core::embed(&cover, &payload).expect("Cannot embed payload"))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
