use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba};
use stegostudio_core::{embed, PayloadType, PixelBuffer};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let carrier = PixelBuffer::from(ImageBuffer::from_fn(512, 512, |x, y| {
            Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
        }));
        let secret_message = b"Hello World!";

        b.iter(|| {
            let mut carrier = carrier.clone();
            embed(&mut carrier, PayloadType::Text, &secret_message[..])
                .expect("Cannot hide secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
