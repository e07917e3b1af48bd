#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let dimension = imgdim::get_dimensions_from_bytes(data);
    if imgdim::decode(&mut Cursor::new(data)).is_err() {
        assert!(dimension.is_empty());
    }
});
