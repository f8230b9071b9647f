//! Affine maps modulo 2^128 and their fast-doubling powers.

/// The affine map `x → multiplier·x + increment (mod 2^128)`.
///
/// One LCG step is such a map; `n` steps are its `n`-th power, which
/// [`pow`](Self::pow) computes with O(log n) multiply-adds.
///
/// # Examples
///
/// ```rust
/// use zigrand::jump::AffineStep;
///
/// let step = AffineStep::new(6364136223846793005, 1442695040888963407);
/// let mut x = 17u128;
/// for _ in 0..1000 {
///     x = step.apply(x);
/// }
/// assert_eq!(step.pow(1000).apply(17), x);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffineStep {
    multiplier: u128,
    increment: u128,
}

impl AffineStep {
    /// The identity map.
    pub const IDENTITY: Self = Self {
        multiplier: 1,
        increment: 0,
    };

    /// Creates the map `x → multiplier·x + increment`.
    #[inline]
    pub const fn new(multiplier: u128, increment: u128) -> Self {
        Self {
            multiplier,
            increment,
        }
    }

    /// Returns the multiplier.
    #[inline]
    pub fn multiplier(&self) -> u128 {
        self.multiplier
    }

    /// Returns the increment.
    #[inline]
    pub fn increment(&self) -> u128 {
        self.increment
    }

    /// Applies the map to `x`.
    #[inline]
    pub fn apply(&self, x: u128) -> u128 {
        self.multiplier.wrapping_mul(x).wrapping_add(self.increment)
    }

    /// Returns `self` followed by `next`.
    #[inline]
    pub fn then(&self, next: &Self) -> Self {
        Self {
            multiplier: next.multiplier.wrapping_mul(self.multiplier),
            increment: next
                .multiplier
                .wrapping_mul(self.increment)
                .wrapping_add(next.increment),
        }
    }

    /// Returns the map applied `distance` times.
    ///
    /// Squares the base map once per bit of `distance` and folds it into the
    /// accumulator for every set bit.
    pub fn pow(&self, mut distance: u128) -> Self {
        let mut acc = Self::IDENTITY;
        let mut base = *self;
        while distance > 0 {
            if distance & 1 == 1 {
                acc = acc.then(&base);
            }
            base = base.then(&base);
            distance >>= 1;
        }
        acc
    }
}
