//! A pre-sized arena backing Karatsuba's recursive temporaries.
//!
//! The original allocates and frees a scratch buffer at every level of
//! recursion (`APM_TMP_ALLOC`/`APM_TMP_FREE`). Design Note "Karatsuba
//! scratch allocation" in the spec suggests pre-sizing a single arena for
//! the whole recursion instead, to avoid allocator churn in the hot path.
//!
//! [`Scratch`] owns that single buffer; it hands it out once, as a plain
//! `&mut [Digit]`, and [`crate::mul::mul_n`]/[`crate::sqr::sqr_into`] carve
//! it up themselves via `split_at_mut` — each recursion level peels its own
//! temporaries off the front and passes the remainder down, so every
//! temporary at every level lives in the one arena with no further heap
//! allocation, and no data is ever copied out just to satisfy the borrow
//! checker (disjoint `split_at_mut` pieces can be held, and recursed
//! through, simultaneously).
use crate::digit::Digit;

pub struct Scratch {
    buf: Vec<Digit>,
}

impl Scratch {
    /// `capacity` should cover the total scratch a full recursion needs;
    /// see `mul::karatsuba_scratch_estimate`/`sqr`'s analogous helper for
    /// how callers size this.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: vec![0; capacity] }
    }

    /// The whole arena as one mutable slice. Callers split this themselves
    /// via `split_at_mut` to carve out disjoint regions.
    pub fn as_mut_slice(&mut self) -> &mut [Digit] {
        &mut self.buf
    }
}
