//! Tritgen - Ternary MAC Test-Vector Generator
//!
//! Generates randomized input stimulus plus a precomputed golden reference
//! for validating fixed-point SIMD multiply-accumulate hardware that operates
//! on ternary {-1, 0, +1} activation and weight digits. Stimulus and golden
//! rows are serialized to a shared plain-text artifact that a hardware
//! simulator or testbench compares its own output against.

pub mod cli;
pub mod generator;
pub mod ternary;
pub mod universe;

// Re-export main types for convenience
pub use generator::{generate_to_path, GenConfig, GenReport, TestCase, VectorGenerator};
pub use ternary::{Trit, TritVec};
pub use universe::{enumerate_ternary, Universe};
