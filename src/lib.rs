//! Arbitrary-precision unsigned magnitude arithmetic (APM) and a signed
//! [`BigInt`] wrapper built on top of it.
//!
//! The digit-vector core (`digit`, `ops`, `mul`, `sqr`, `radix`) is public so
//! callers who already manage their own `Vec<Digit>` storage can use it
//! directly; most users want [`BigInt`] instead.

pub mod digit;
pub mod ops;

mod bignum;
mod mul;
mod radix;
mod scratch;
mod sqr;

pub use bignum::BigInt;
pub use digit::Digit;
pub use mul::{mul, mul_base, K_MUL};
pub use radix::format;
pub use sqr::{sqr, sqr_base, K_BASE_SQR, K_SQR};
