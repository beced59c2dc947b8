use ramm_math::*;

const MODULUS_MINUS_ONE: u128 = CUMULATIVE_MASK;

#[test]
fn test_wrap_cumulative() {
    assert_eq!(wrap_cumulative(0), 0);
    assert_eq!(wrap_cumulative(MODULUS_MINUS_ONE), MODULUS_MINUS_ONE);
    assert_eq!(wrap_cumulative(MODULUS_MINUS_ONE + 1), 0);
    assert_eq!(wrap_cumulative(MODULUS_MINUS_ONE + 6), 5);
}

#[test]
fn test_add_cumulative_without_wrap() {
    assert_eq!(add_cumulative(100, 23), 123);
}

#[test]
fn test_add_cumulative_wraps() {
    let near_top = MODULUS_MINUS_ONE - 9;
    // 10 steps reach 2^112 exactly, 15 land at 5
    assert_eq!(add_cumulative(near_top, 10), 0);
    assert_eq!(add_cumulative(near_top, 15), 5);
}

#[test]
fn test_delta_across_wrap() {
    let older = MODULUS_MINUS_ONE - 9;
    let newer = add_cumulative(older, 1_000);

    assert!(newer < older);
    assert_eq!(cumulative_delta(newer, older), 1_000);
}

#[test]
fn test_delta_same_value_is_zero() {
    assert_eq!(cumulative_delta(42, 42), 0);
}
