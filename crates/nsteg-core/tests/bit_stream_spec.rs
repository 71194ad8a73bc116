use speculate::speculate;

use nsteg_core::{BitSink, BitStream, LengthHeaderCodec, NstegError, ReadBit};

speculate! {
    describe "BitStream::read_bit()" {
        // String: H           e
        // Hex   : 0x48        0x65
        // Binary: 0b01001000  0b01100101
        it "should return the bits of H most significant first" {
            let mut bits = BitStream::from(&b"He"[..]);
            let h: Vec<bool> = (0..8).map(|_| bits.read_bit().unwrap()).collect();

            assert_eq!(h, vec![false, true, false, false, true, false, false, false]);
            assert_eq!(bits.position(), 8);
        }

        it "should continue with e after 8 bits" {
            let mut bits = BitStream::from(&b"He"[..]).skip(8);

            assert_eq!(bits.next(), Some(false), "1st bit not correct");
            assert_eq!(bits.next(), Some(true), "2nd bit not correct");
            assert_eq!(bits.next(), Some(true), "3rd bit not correct");
            assert_eq!(bits.next(), Some(false), "4th bit not correct");
            assert_eq!(bits.next(), Some(false), "5th bit not correct");
            assert_eq!(bits.next(), Some(true), "6th bit not correct");
            assert_eq!(bits.next(), Some(false), "7th bit not correct");
            assert_eq!(bits.next(), Some(true), "8th bit not correct");
            assert_eq!(bits.next(), None, "it should end after the last bit on the last byte");
        }

        it "should fail instead of reading past the end" {
            let mut bits = BitStream::new(Vec::new());

            assert_eq!(bits.remaining(), 0);
            assert!(matches!(bits.read_bit(), Err(NstegError::EndOfStream)));
        }
    }

    describe "BitSink::write_bit()" {
        it "should reassemble what the stream yields" {
            let mut sink = BitSink::new();
            for bit in BitStream::from(&b"stegano"[..]) {
                sink.write_bit(bit).unwrap();
            }

            assert_eq!(sink.into_bytes(), b"stegano".to_vec());
        }
    }

    describe "LengthHeaderCodec::write_header()" {
        it "should frame a length in 32 bits" {
            let mut sink = BitSink::new();
            LengthHeaderCodec::default().write_header(&mut sink, 5).unwrap();

            assert_eq!(sink.bits_written(), 32);
            let mut stream = sink.into_bit_stream();
            assert_eq!(LengthHeaderCodec::default().read_header(&mut stream).unwrap(), 5);
        }
    }
}
