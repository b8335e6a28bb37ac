#![no_main]

use std::io::Cursor;

use chunk64::{Decoder, Encoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let whole = chunk64::encode(&data);

    for chunk_size in [3, 6, 9, 300, 3 * 1024] {
        // Verify: chunking does not change the output
        let streamed = Encoder::new(chunk_size)
            .encode_to_string(Cursor::new(&data))
            .unwrap();
        assert_eq!(streamed, whole);

        // Verify: offsets cover the input without gaps
        let mut expected_offset = 0u64;
        for chunk in Encoder::new(chunk_size).encode(Cursor::new(&data)) {
            let chunk = chunk.unwrap();
            assert_eq!(chunk.offset, expected_offset);
            expected_offset += chunk.input_len as u64;
        }
        assert_eq!(expected_offset, data.len() as u64);
    }

    // Verify: round trip through the streaming decoder
    for chunk_size in [4, 8, 400] {
        let mut out = Vec::new();
        Decoder::new(chunk_size)
            .decode_to_writer(Cursor::new(whole.as_bytes()), &mut out)
            .unwrap();
        assert_eq!(out, data);
    }
});
