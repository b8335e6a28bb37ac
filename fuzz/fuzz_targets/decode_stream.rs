#![no_main]

use std::io::Cursor;

use chunk64::Decoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // Arbitrary input: chunked decoding must agree with whole decoding,
    // both on success and on failure.
    let whole = std::str::from_utf8(&data).ok().map(chunk64::decode);

    for chunk_size in [4, 8, 64] {
        let mut out = Vec::new();
        let streamed = Decoder::new(chunk_size).decode_to_writer(Cursor::new(&data), &mut out);

        match &whole {
            Some(Ok(bytes)) => {
                assert!(streamed.is_ok());
                assert_eq!(&out, bytes);
            }
            Some(Err(_)) | None => assert!(streamed.is_err()),
        }
    }
});
