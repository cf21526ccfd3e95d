// Saturating integer arithmetic.
//
// Every score computation in the ranking algorithm goes through these
// helpers. Their exact rounding and saturation behavior is part of the
// scoring contract: two implementations must produce identical scores bit
// for bit, so none of this can be "improved" without versioning the scores.

/// Multiply two non-negative scores, saturating at `i32::MAX`.
#[inline]
pub fn mul_capped(a: i32, b: i32) -> i32 {
    a.saturating_mul(b)
}

/// Raise `base` to the `n`-th power with capped multiplications.
///
/// `n == 0` returns 1. For `n <= 1` (including negative exponents, which
/// the ranking can produce when the edit distance exceeds the candidate
/// length) the result is `base` itself, mirroring the iterated-multiply
/// loop this is defined as.
#[inline]
pub fn pow_capped(base: i32, n: i32) -> i32 {
    if n == 0 {
        return 1;
    }
    let mut ret = base;
    let mut i = 1;
    while i < n {
        ret = mul_capped(base, ret);
        i += 1;
    }
    ret
}

/// Scale `freq` by `rate` percent.
///
/// For large values the division happens first to keep the intermediate
/// product in range; for small values the multiplication happens first to
/// keep precision. `i32::MAX` is absorbing: a saturated score stays
/// saturated.
#[inline]
pub fn mul_rate(rate: i32, freq: i32) -> i32 {
    if freq == i32::MAX {
        return freq;
    }
    if freq > 1_000_000 {
        mul_capped(rate, freq / 100)
    } else {
        mul_capped(rate, freq) / 100
    }
}

const CAP_DIV_255: i32 = i32::MAX / 255;

/// The 255x promotion applied to full matches that differ only by accents
/// or capitalization. Saturates for any input at or above `i32::MAX / 255`.
#[inline]
pub fn cap255_for_full_match(num: i32) -> i32 {
    if num < CAP_DIV_255 {
        255 * num
    } else {
        i32::MAX
    }
}
