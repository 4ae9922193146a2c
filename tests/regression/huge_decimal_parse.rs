use arbint::{BigInt, Sign};

#[test]
fn test() {
    let mut a = BigInt::empty();
    a.init().unwrap();
    a.parse_radix("792384103083241340432014773910347139419741", 10).unwrap();
    assert_eq!(a.limbs(), &[313953885, 3019150336, 3284471345, 2609588367, 2328]);
    assert_eq!(a.sign(), Sign::Positive);

    // Parsing again into the same target replaces it.
    a.parse_radix("-792384103083241340432014773910347139419741", 10).unwrap();
    assert_eq!(a.limbs(), &[313953885, 3019150336, 3284471345, 2609588367, 2328]);
    assert_eq!(a.sign(), Sign::Negative);
}
