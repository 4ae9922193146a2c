use arbint::{BigInt, Sign};

fn dec(text: &str) -> BigInt {
    BigInt::from_str_radix(text, 10).unwrap()
}

fn signed_samples() -> Vec<BigInt> {
    [
        "0",
        "-0",
        "1",
        "-1",
        "4294967295",
        "-4294967296",
        "18446744073709551615",
        "-18446744073709551616",
        "340282366920938463463374607431768211455",
        "-792384103083241340432014773910347139419741",
    ]
    .iter()
    .map(|text| dec(text))
    .collect()
}

#[test]
fn add_limb_at_grows_and_carries() {
    let mut x = BigInt::new();
    x.add_limb_at(9, 2).unwrap();
    assert_eq!(x.limbs(), &[0, 0, 9]);

    let mut x = BigInt::from_limbs(Sign::Positive, &[u32::MAX, u32::MAX]);
    x.add_limb_at(1, 0).unwrap();
    assert_eq!(x.limbs(), &[0, 0, 1]);

    let mut x = BigInt::from_limbs(Sign::Negative, &[3]);
    x.add_limb_at(0, 50).unwrap();
    assert_eq!(x.limbs(), &[3]);
    assert_eq!(x.sign(), Sign::Negative);
}

#[test]
fn mul_by_ten_keeps_length() {
    let mut x = BigInt::from_limbs(Sign::Positive, &[4294967295, 0, 0]);
    x.mul_limb(10).unwrap();
    assert_eq!(x.limbs(), &[4294967286, 9, 0]);
}

#[test]
fn mul_identity_and_annihilator() {
    for sample in signed_samples() {
        let mut x = sample.copy().unwrap();
        x.mul_limb(1).unwrap();
        assert_eq!(x.limbs(), sample.limbs());
        assert_eq!(x.sign(), sample.sign());

        x.mul_limb(0).unwrap();
        assert!(x.is_zero());
        assert_eq!(x.len(), sample.len());
    }
}

#[test]
fn mul_matches_parse() {
    let mut b = dec("999999999999999999999999");
    b.mul_limb(10).unwrap();
    assert_eq!(b, dec("9999999999999999999999990"));

    let mut b = dec("-77777777777777777777777777777777777777");
    b.mul_limb(100000000).unwrap();
    assert_eq!(b, dec("-7777777777777777777777777777777777777700000000"));
}

#[test]
fn mul_empty_is_an_error() {
    let mut x = BigInt::empty();
    assert!(x.mul_limb(3).unwrap_err().is_state());
}

#[test]
fn repdigits() {
    let a = dec("88888888888888888888888888888888888888");
    let b = dec("-33333333333333333333333333333333333333");
    let c = dec("55555555555555555555555555555555555555");
    assert_eq!(a.add(&b).unwrap(), c);
    assert_eq!(b.add(&a).unwrap(), c);
    assert_eq!(a.sub(&c).unwrap(), -b.copy().unwrap());
}

#[test]
fn add_sign_table() {
    let five = BigInt::from(5u64);
    let three = BigInt::from(3u64);
    let minus_five = -five.copy().unwrap();
    let minus_three = -three.copy().unwrap();

    assert_eq!(five.add(&three).unwrap(), BigInt::from(8i64));
    assert_eq!(five.add(&minus_three).unwrap(), BigInt::from(2i64));
    assert_eq!(three.add(&minus_five).unwrap(), BigInt::from(-2i64));
    assert_eq!(minus_five.add(&three).unwrap(), BigInt::from(-2i64));
    assert_eq!(minus_three.add(&five).unwrap(), BigInt::from(2i64));
    assert_eq!(minus_five.add(&minus_three).unwrap(), BigInt::from(-8i64));
}

#[test]
fn sub_sign_table() {
    let five = BigInt::from(5u64);
    let three = BigInt::from(3u64);
    let minus_five = BigInt::from(-5i64);
    let minus_three = BigInt::from(-3i64);

    assert_eq!(five.sub(&three).unwrap(), BigInt::from(2i64));
    assert_eq!(three.sub(&five).unwrap(), BigInt::from(-2i64));
    assert_eq!(five.sub(&minus_three).unwrap(), BigInt::from(8i64));
    assert_eq!(minus_five.sub(&three).unwrap(), BigInt::from(-8i64));
    assert_eq!(minus_five.sub(&minus_three).unwrap(), BigInt::from(-2i64));
    assert_eq!(minus_three.sub(&minus_five).unwrap(), BigInt::from(2i64));
}

#[test]
fn zero_operands() {
    let zero = BigInt::new();
    let minus_zero = BigInt::from_limbs(Sign::Negative, &[0, 0, 0]);
    let x = BigInt::from(-12i64);

    let sum = zero.add(&minus_zero).unwrap();
    assert!(sum.is_zero());
    assert_eq!(sum.limbs(), &[0]);

    assert_eq!(zero.add(&x).unwrap(), x);
    assert_eq!(x.add(&minus_zero).unwrap(), x);
    assert_eq!(zero.sub(&x).unwrap(), BigInt::from(12i64));
}

#[test]
fn operands_are_not_mutated() {
    let a = BigInt::from_limbs(Sign::Positive, &[u32::MAX, u32::MAX]);
    let b = BigInt::from_limbs(Sign::Negative, &[1]);
    let _ = a.add(&b).unwrap();
    let _ = a.sub(&b).unwrap();
    assert_eq!(a.limbs(), &[u32::MAX, u32::MAX]);
    assert_eq!(b.limbs(), &[1]);
    assert_eq!(b.sign(), Sign::Negative);
}

#[test]
fn add_carries_out_of_top_limb() {
    let a = BigInt::from(u64::MAX);
    let b = BigInt::from(1u64);
    let sum = a.add(&b).unwrap();
    assert_eq!(sum.limbs(), &[0, 0, 1]);
}

#[test]
fn sub_borrows_across_limbs() {
    let a = BigInt::from_limbs(Sign::Positive, &[0, 0, 1]);
    let b = BigInt::from(1u64);
    let difference = a.sub(&b).unwrap();
    assert_eq!(difference.limbs(), &[u32::MAX, u32::MAX, 0]);
    assert_eq!(difference.sign(), Sign::Positive);
}

#[test]
fn operands_of_different_length() {
    let long = BigInt::from_limbs(Sign::Positive, &[5, 0, 0, 0]);
    let short = BigInt::from_limbs(Sign::Negative, &[7]);
    assert_eq!(long.add(&short).unwrap(), BigInt::from(-2i64));
    assert_eq!(short.add(&long).unwrap(), BigInt::from(-2i64));
}

#[test]
fn additive_inverse() {
    for x in signed_samples() {
        let inverse = -x.copy().unwrap();
        assert!(x.add(&inverse).unwrap().is_zero());
        assert!(x.sub(&x).unwrap().is_zero());
    }
}

#[test]
fn commutativity() {
    let samples = signed_samples();
    for a in &samples {
        for b in &samples {
            assert_eq!(a.add(b).unwrap(), b.add(a).unwrap(), "{:?} + {:?}", a, b);
        }
    }
}

#[test]
fn sub_undoes_add() {
    let samples = signed_samples();
    for a in &samples {
        for b in &samples {
            let sum = a.add(b).unwrap();
            assert_eq!(sum.sub(b).unwrap(), *a, "({:?} + {:?}) - {:?}", a, b, b);
        }
    }
}

#[test]
fn empty_operands() {
    let empty = BigInt::empty();
    let one = BigInt::from(1u64);
    assert!(empty.add(&one).unwrap_err().is_state());
    assert!(one.add(&empty).unwrap_err().is_state());
    assert!(one.sub(&empty).unwrap_err().is_state());
}

#[test]
fn neg_in_place() {
    let mut x = BigInt::from(5u64);
    x.neg();
    assert_eq!(x.sign(), Sign::Negative);
    x.neg();
    assert_eq!(x.sign(), Sign::Positive);
}
