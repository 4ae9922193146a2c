#![no_main]

use arbint::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, String)| {
    let radix = u32::from(data.0 % 35) + 2;
    if let Ok(value) = BigInt::from_str_radix(&data.1, radix) {
        let hex = value.to_hex().unwrap();
        let back = BigInt::from_str_radix(&hex, 16).unwrap();
        assert_eq!(back, value);
    }
});
