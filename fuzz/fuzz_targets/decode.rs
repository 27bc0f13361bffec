#![no_main]
use libfuzzer_sys::fuzz_target;

use lifx_emu_core::{decode, encode};

fuzz_target!(|data: &[u8]| {
    if let Ok((header, msg)) = decode(data) {
        // reserved fields are zeroed and trailing payload bytes dropped, so only check that the
        // message survives a second trip
        let bytes = encode(&header, &msg).unwrap();
        let (_, msg2) = decode(&bytes).unwrap();
        assert_eq!(encode(&header, &msg2).unwrap(), bytes);
    }
});
