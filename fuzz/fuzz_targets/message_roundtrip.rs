#![no_main]
use libfuzzer_sys::fuzz_target;

use lifx_emu_core::{decode, encode, BuildOptions, Error, Header, Message};

fuzz_target!(|data: (BuildOptions, Message)| {
    let (opts, msg) = data;
    let header = Header::new(&opts, &msg);

    let bytes = match encode(&header, &msg) {
        Ok(bytes) => bytes,
        // too many extended zone colors
        Err(Error::InputTooLong { .. }) => return,
        Err(e) => panic!("encode failed: {:?}", e),
    };
    assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]) as usize, bytes.len());

    let (header2, msg2) = decode(&bytes).unwrap();
    assert_eq!(header, header2);

    // NaN fields make the messages themselves incomparable, the bytes still are
    let again = encode(&header2, &msg2).unwrap();
    assert_eq!(bytes, again);
});
