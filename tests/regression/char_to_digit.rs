use arbint::digit::to_digit;

#[test]
fn test() {
    assert_eq!(to_digit('0', 10), Some(0));
    assert_eq!(to_digit('9', 10), Some(9));
    assert_eq!(to_digit('*', 10), None);
    assert_eq!(to_digit('a', 10), None);
    assert_eq!(to_digit('\0', 10), None);
    assert_eq!(to_digit('a', 11), Some(10));
    assert_eq!(to_digit('z', 36), Some(35));
    assert_eq!(to_digit('Z', 36), Some(35));
    assert_eq!(to_digit('1', 1), None);
    assert_eq!(to_digit('1', 37), None);
}
