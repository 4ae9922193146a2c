#![no_main]

use arbint::{BigInt, Sign};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (bool, Vec<u32>, bool, Vec<u32>)| {
    let sign = |negative| if negative { Sign::Negative } else { Sign::Positive };
    if data.1.is_empty() || data.3.is_empty() {
        return;
    }
    let a = BigInt::from_limbs(sign(data.0), &data.1);
    let b = BigInt::from_limbs(sign(data.2), &data.3);

    let sum = a.add(&b).unwrap();
    assert_eq!(sum, b.add(&a).unwrap());
    assert_eq!(sum.sub(&b).unwrap(), a);
    assert!(a.sub(&a).unwrap().is_zero());
});
