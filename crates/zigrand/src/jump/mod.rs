//! # Jump-Ahead Algebra
//!
//! Skip-ahead machinery shared by the engines that support a native jump:
//!
//! - [`AffineStep`]: composition of affine maps `x → a·x + b` modulo 2^128 by
//!   fast doubling. Used by [`Pcg64Dxsm`](crate::engines::Pcg64Dxsm); cost is
//!   O(log distance) whatever the distance.
//! - [`JumpPolynomial`]: a GF(2) jump polynomial written as a hexadecimal
//!   digit string, walked most significant bit first. Used by
//!   [`Melg19937`](crate::engines::Melg19937); cost is one generator step per
//!   polynomial bit plus one state-sized XOR per set bit, for every jump
//!   unit.
//!
//! xoshiro256+ keeps its two 256-bit jump constants next to its recurrence.
//!
//! ## Cost asymmetry
//!
//! | Engine | Cost of `jump(n)` |
//! |--------|-------------------|
//! | PCG64DXSM | O(128) multiply-adds, independent of `n` |
//! | xoshiro256+ | n × 256 steps |
//! | MELG19937 | n × (19937 steps + ~10^4 × 311-word XORs) |

mod affine;
mod polynomial;

pub use affine::AffineStep;
pub use polynomial::{JumpPolynomial, MELG19937_JUMP_2POW256};
