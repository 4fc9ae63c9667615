use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba};
use stegostudio_core::{decode, embed, PayloadType, PixelBuffer};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let mut carrier = PixelBuffer::from(ImageBuffer::from_fn(512, 512, |x, y| {
            Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
        }));
        let payload = vec![0xa5; 64 * 1024];
        embed(&mut carrier, PayloadType::Audio, &payload).expect("Cannot hide payload");

        b.iter(|| {
            decode(&carrier).expect("Failed to unveil payload");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
