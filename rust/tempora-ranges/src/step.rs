//! The value-arithmetic capability consumed by fixed-step sequences.

/// Values that can be moved by a whole number of natural units (days for a
/// date, months for a year-month, one for an integer).
///
/// # Invariants
///
/// For any `a`, `n`, and `m` where no overflow occurs:
///
/// * `a.step_by(n).step_by(m) == a.step_by(n + m)`
/// * `a.step_by(0) == a`
/// * `Steppable::units_between(&a, &a.step_by(n)) == n`
/// * `a.step_by(n) > a` if and only if `n > 0`
///
/// Splitting a sequence relies on the first law: the split-off half starts at a
/// value reached with one jump, which must equal the value reached by stepping
/// one unit at a time.
pub trait Steppable: Clone + Ord {
    /// Returns the value `count` units away from `self`; negative counts move
    /// towards smaller values.
    ///
    /// Implementations may panic if the result is not representable. Sequences
    /// only step to values lying between two representable range bounds.
    fn step_by(&self, count: i64) -> Self;

    /// Returns the signed number of units from `start` to `end`, positive when
    /// `end` is greater than `start`.
    fn units_between(start: &Self, end: &Self) -> i64;
}

macro_rules! steppable_integer {
    ($($t:ty),*) => {
        $(
            impl Steppable for $t {
                #[inline]
                fn step_by(&self, count: i64) -> Self {
                    (*self as i64)
                        .checked_add(count)
                        .and_then(|value| <$t>::try_from(value).ok())
                        .unwrap_or_else(|| {
                            panic!(
                                "Arithmetic overflow: cannot step {} by {} in {}",
                                self,
                                count,
                                stringify!($t)
                            )
                        })
                }

                #[inline]
                fn units_between(start: &Self, end: &Self) -> i64 {
                    *end as i64 - *start as i64
                }
            }
        )*
    };
}

// Restricted to types whose full span fits in an `i64` distance.
steppable_integer!(i8, i16, i32, u8, u16, u32);
