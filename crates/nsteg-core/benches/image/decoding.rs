use criterion::{criterion_group, criterion_main, Criterion};
use nsteg_core::{Codec, PixelGrid};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let codec = Codec::new();
        let plain_image = PixelGrid::<u8>::from_fn(512, 512, 4, |x, y, pixel| {
            pixel.copy_from_slice(&[x as u8, y as u8, (x ^ y) as u8, 255]);
        })
        .expect("Cannot build carrier grid");
        let secret_image = codec
            .encode(&plain_image, &[0x42; 4096])
            .expect("Cannot write secret message");

        b.iter(|| {
            codec
                .decode(&secret_image)
                .expect("Failed to read 4096 bytes")
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
