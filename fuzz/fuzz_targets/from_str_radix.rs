#![no_main]

use arbint::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u32, String)| {
    let (radix, text) = data;
    let _ = BigInt::from_str_radix(&text, radix);
});
