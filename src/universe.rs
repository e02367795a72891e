//! Ternary universe enumeration and uniform sampling.
//!
//! The universe for a digit width W is the table of legal width-W trit
//! vectors the generator is allowed to sample stimulus from. It is built
//! once per operand role (activation-space, weight-space) and is read-only
//! afterwards.
//!
//! # Coverage
//!
//! The enumeration is deliberately partial: width W yields
//! `2^(W+1) - 1` vectors (3, 7, 15, 31, ...), a vanishing fraction of the
//! full `3^W` space. Vectors with a zero digit anywhere but in a trailing
//! run of zeros (e.g. `[0, 1]` at width 2) are absent. The sampling
//! distribution the downstream testbench was characterized against depends
//! on this exact universe, so the gap must be preserved, not closed.

use crate::ternary::{Trit, TritVec};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io;

/// Enumerate the legal ternary vectors of the given width.
///
/// Width 1 is the base case `[Z], [N], [P]`. Every larger width is the
/// union of two disjoint families:
///
/// - the width-(W-1) universe with a trailing `Z` appended;
/// - the `2^W` vectors whose digits are all drawn from {N, P}, grown
///   iteratively from the two singletons `[N]`, `[P]`.
///
/// Fails with `ErrorKind::InvalidInput` for width 0; total otherwise.
pub fn enumerate_ternary(width: usize) -> io::Result<Vec<TritVec>> {
    if width == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "ternary digit width must be at least 1",
        ));
    }

    if width == 1 {
        return Ok(vec![vec![Trit::Z], vec![Trit::N], vec![Trit::P]]);
    }

    let mut out: Vec<TritVec> = Vec::with_capacity(universe_size(width));

    // Zero-extended family: everything one digit narrower, with Z appended.
    for mut v in enumerate_ternary(width - 1)? {
        v.push(Trit::Z);
        out.push(v);
    }

    // Non-zero-tail family: all-{N,P} vectors, one digit appended per round.
    let mut family: Vec<TritVec> = vec![vec![Trit::N], vec![Trit::P]];
    for _ in 1..width {
        let mut next = Vec::with_capacity(family.len() * 2);
        for v in &family {
            let mut lo = v.clone();
            lo.push(Trit::N);
            next.push(lo);
            let mut hi = v.clone();
            hi.push(Trit::P);
            next.push(hi);
        }
        family = next;
    }
    out.extend(family);

    Ok(out)
}

/// Number of vectors `enumerate_ternary` produces for a width.
///
/// The two families are disjoint, so the count follows the recurrence
/// `|U(W)| = |U(W-1)| + 2^W` with `|U(1)| = 3`: the zero-extended family
/// contributes the (already partial) narrower universe, not `3^(W-1)`.
/// Closed form: `2^(W+1) - 1`.
pub fn universe_size(width: usize) -> usize {
    2usize.pow((width + 1) as u32) - 1
}

/// Enumerated vector table for one operand role, with uniform sampling.
#[derive(Clone, Debug)]
pub struct Universe {
    width: usize,
    table: Vec<TritVec>,
}

impl Universe {
    /// Build the universe for a digit width. Fails for width 0.
    pub fn enumerate(width: usize) -> io::Result<Self> {
        let table = enumerate_ternary(width)?;
        Ok(Universe { width, table })
    }

    /// Digit width of every vector in the table.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of vectors in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn as_slice(&self) -> &[TritVec] {
        &self.table
    }

    /// Draw one vector uniformly at random from the table.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &TritVec {
        self.table
            .choose(rng)
            .expect("universe table is non-empty by construction")
    }

    /// Membership test (linear scan; the tables involved are small).
    pub fn contains(&self, v: &[Trit]) -> bool {
        self.table.iter().any(|row| row == v)
    }
}
