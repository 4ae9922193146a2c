use arbint::{BigInt, Sign};

#[test]
fn by_666() {
    let mut b = BigInt::from_limbs(Sign::Positive, &[4294967295, 4294967295, 0]);
    b.mul_limb(666).unwrap();
    assert_eq!(b.limbs(), &[4294966630, 4294967295, 665]);
}

#[test]
fn by_max_without_growth() {
    // The top limb gets close to overflowing, but there is no carry out.
    let mut c = BigInt::from_limbs(Sign::Positive, &[4294967295, 4294967295, 0]);
    c.mul_limb(u32::MAX).unwrap();
    assert_eq!(c.len(), 3);
    assert_eq!(c.limbs(), &[1, 4294967295, 4294967294]);
}

#[test]
fn by_1291_with_growth() {
    let mut d = BigInt::from_limbs(Sign::Positive, &[0, 0, 4200000000]);
    d.mul_limb(1291).unwrap();
    assert_eq!(d.len(), 4);
    assert_eq!(d.limbs(), &[0, 0, 1951272448, 1262]);
}
