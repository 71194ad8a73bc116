use nsteg_core::{Codec, CodecOptions, NstegError, PixelGrid};

/// colors that vary per pixel, so that least significant bits start out mixed
fn carrier(width: u32, height: u32, channels: u8) -> PixelGrid {
    PixelGrid::from_fn(width, height, channels, |x, y, pixel| {
        for (c, v) in pixel.iter_mut().enumerate() {
            *v = (x * 7 + y * 13 + c as u32 * 31) as u8;
        }
    })
    .expect("Cannot build carrier grid")
}

fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 37 % 256) as u8).collect()
}

#[test]
fn should_roundtrip_payloads_up_to_the_capacity() {
    let codec = Codec::new();
    for (width, height, channels) in [(10, 10, 4), (16, 9, 3), (33, 7, 4), (64, 64, 4)] {
        let grid = carrier(width, height, channels);
        let capacity = codec.capacity(&grid) as usize;

        for len in [0, 1, 2, capacity / 2, capacity] {
            let p = payload(len);
            let secret = codec.encode(&grid, &p).expect("Cannot encode payload");

            assert_eq!(
                codec.decode(&secret).expect("Cannot decode payload"),
                p,
                "{width}x{height}x{channels} with {len} bytes"
            );
            assert_eq!(codec.message_size(&secret).unwrap(), len as u32);
        }
    }
}

#[test]
fn should_encode_hello_into_a_10x10_rgba_grid() {
    let grid = carrier(10, 10, 4);
    let codec = Codec::new();

    assert_eq!(grid.bits_per_channel(), 8);
    assert_eq!(codec.capacity(&grid), 33);

    let secret = codec.encode(&grid, b"hello").expect("Cannot encode hello");
    assert_eq!(codec.decode(&secret).unwrap(), b"hello");

    let too_big = payload(34);
    assert!(matches!(
        codec.encode(&grid, &too_big),
        Err(NstegError::CapacityExceeded { .. })
    ));
    assert!(codec.encode(&grid, &payload(33)).is_ok());
}

#[test]
fn should_never_mutate_the_input_grid() {
    let grid = carrier(20, 20, 4);
    let before = grid.clone();

    let _ = Codec::new().encode(&grid, b"some secret").unwrap();
    assert_eq!(grid, before);

    let _ = Codec::new().encode(&grid, &payload(10_000)).unwrap_err();
    assert_eq!(grid, before);
}

#[test]
fn should_preserve_every_alpha_value() {
    let grid = carrier(20, 20, 4);
    let secret = Codec::new().encode(&grid, &payload(140)).unwrap();

    for (given, expected) in secret
        .samples()
        .chunks_exact(4)
        .zip(grid.samples().chunks_exact(4))
    {
        assert_eq!(given[3], expected[3]);
    }
}

#[test]
fn should_change_channels_by_at_most_one() {
    let grid = carrier(20, 20, 3);
    let secret = Codec::new().encode(&grid, &payload(100)).unwrap();

    for (given, expected) in secret.samples().iter().zip(grid.samples()) {
        assert!(given.abs_diff(*expected) <= 1);
        assert_eq!(given >> 1, expected >> 1);
    }
}

#[test]
fn should_grow_capacity_with_the_pixel_count() {
    let codec = Codec::new();
    let mut last = 0;
    for side in 4..40 {
        let capacity = codec.capacity(&carrier(side, side, 4));
        if side > 4 {
            assert!(capacity > last, "{side}x{side} should hold more than {last}");
        }
        last = capacity;
    }

    // 10 pixels * 3 = 30 bits, less than the header alone
    assert_eq!(codec.capacity(&carrier(10, 1, 4)), 0);
    assert_eq!(codec.capacity(&carrier(0, 0, 4)), 0);
}

#[test]
fn should_zero_the_header_for_an_empty_payload() {
    let grid = carrier(10, 10, 3);
    let secret = Codec::new().encode(&grid, &[]).unwrap();

    let header_bits: Vec<u8> = secret.samples()[..32].iter().map(|c| c & 1).collect();
    assert_eq!(header_bits, vec![0; 32]);
    assert_eq!(secret.samples()[32..], grid.samples()[32..]);
    assert_eq!(Codec::new().decode(&secret).unwrap(), Vec::<u8>::new());
}

#[test]
fn should_refuse_grids_smaller_than_the_header() {
    let grid = carrier(5, 2, 3);

    assert!(matches!(
        Codec::new().encode(&grid, &[]),
        Err(NstegError::CapacityExceeded { .. })
    ));
    assert!(matches!(
        Codec::new().decode(&grid),
        Err(NstegError::TruncatedHeader { available: 30 })
    ));
    assert!(matches!(
        Codec::new().message_size(&grid),
        Err(NstegError::TruncatedHeader { .. })
    ));
}

#[test]
fn should_detect_a_cropped_carrier() {
    let grid = carrier(20, 20, 4);
    let secret = Codec::new().encode(&grid, &payload(140)).unwrap();

    // keep only the first two rows
    let cropped = PixelGrid::new(20, 2, 4, secret.samples()[..20 * 2 * 4].to_vec()).unwrap();
    assert!(matches!(
        Codec::new().decode(&cropped),
        Err(NstegError::TruncatedPayload { declared: 140, .. })
    ));
}

#[test]
fn should_roundtrip_16_bit_grids() {
    let grid = PixelGrid::<u16>::from_fn(12, 12, 4, |x, y, pixel| {
        pixel.copy_from_slice(&[x as u16 * 5000, y as u16 * 5000, 0xffff, 0x8000]);
    })
    .unwrap();
    let codec = Codec::new();

    assert_eq!(grid.bits_per_channel(), 16);
    let secret = codec.encode(&grid, b"deep colors").unwrap();
    assert_eq!(codec.decode(&secret).unwrap(), b"deep colors");
}

#[test]
fn should_not_unveil_with_other_options() {
    let grid = carrier(20, 20, 4);
    let with_alpha = Codec::with_options(CodecOptions {
        skip_alpha_channel: false,
        ..CodecOptions::default()
    })
    .unwrap();

    let secret = with_alpha.encode(&grid, b"alpha too").unwrap();
    assert_eq!(with_alpha.decode(&secret).unwrap(), b"alpha too");
    assert_ne!(
        Codec::new().decode(&secret).ok(),
        Some(b"alpha too".to_vec())
    );
}

#[test]
fn should_offer_default_free_functions() {
    let grid = carrier(10, 10, 4);
    let secret = nsteg_core::encode(&grid, b"free").unwrap();

    assert_eq!(nsteg_core::capacity(&grid), 33);
    assert_eq!(nsteg_core::message_size(&secret).unwrap(), 4);
    assert_eq!(nsteg_core::decode(&secret).unwrap(), b"free");
}

#[test]
fn should_be_usable_from_many_threads() {
    let codec = Codec::new();
    std::thread::scope(|s| {
        for i in 0..4u8 {
            let codec = &codec;
            s.spawn(move || {
                let grid = carrier(16 + i as u32, 16, 4);
                let p = vec![i; 20];
                let secret = codec.encode(&grid, &p).unwrap();
                assert_eq!(codec.decode(&secret).unwrap(), p);
            });
        }
    });
}
