use criterion::{criterion_group, criterion_main, Criterion};
use nsteg_core::{Codec, PixelGrid};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let plain_image = PixelGrid::<u8>::from_fn(512, 512, 4, |x, y, pixel| {
            pixel.copy_from_slice(&[x as u8, y as u8, (x ^ y) as u8, 255]);
        })
        .expect("Cannot build carrier grid");
        let secret_message = b"Hello World!";
        let codec = Codec::new();

        b.iter(|| {
            codec
                .encode(&plain_image, &secret_message[..])
                .expect("Cannot write secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
