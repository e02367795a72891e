//! Randomized test-case generation and golden-reference serialization.
//!
//! One test case models a SIMD multiply-accumulate window: `window_size`
//! cycles of `simd_factor` lanes, each lane consuming one random
//! (activation, weight) pair. The golden reference is the per-digit-pair
//! product matrix accumulated across the whole window, flattened row-major
//! as `k * weight_width + m`.
//!
//! # Artifact layout
//!
//! Plain text, fields space-separated, no headers, no row indices. Per test
//! case: `window_size * simd_factor` stimulus lines of
//! `activation_width + weight_width` digits in {-1, 0, 1}, then one golden
//! line of `activation_width * weight_width` accumulated sums. The file is
//! created/truncated at run start and strictly appended to afterwards; the
//! generator is its sole writer.

use crate::ternary::TritVec;
use crate::universe::Universe;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Configuration for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    /// Digit width of each activation vector
    pub activation_width: usize,
    /// Digit width of each weight vector
    pub weight_width: usize,
    /// Number of parallel multiply-accumulate lanes per cycle
    pub simd_factor: usize,
    /// Number of cycles accumulated into one golden result
    pub window_size: usize,
    /// Number of test cases to emit
    pub test_count: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            activation_width: 3,
            weight_width: 3,
            simd_factor: 4,
            window_size: 4,
            test_count: 10,
        }
    }
}

impl GenConfig {
    /// Stimulus rows per test case: one window's worth of lane inputs.
    pub fn pairs_per_case(&self) -> usize {
        self.window_size * self.simd_factor
    }

    /// Entries in the flattened golden matrix.
    pub fn golden_len(&self) -> usize {
        self.activation_width * self.weight_width
    }

    /// Total artifact length in lines for a full run.
    pub fn total_lines(&self) -> usize {
        self.test_count * (self.pairs_per_case() + 1)
    }
}

/// One window's stimulus plus its fully-accumulated golden matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub activation_width: usize,
    pub weight_width: usize,
    /// Stimulus rows, each an activation vector concatenated with a weight
    /// vector.
    pub rows: Vec<TritVec>,
    /// Flattened accumulation matrix, row-major `k * weight_width + m`.
    pub golden: Vec<i32>,
}

impl TestCase {
    /// Serialize this case: all stimulus rows, then the golden row.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.rows {
            write_row(out, row.iter().map(|t| t.to_i8() as i32))?;
        }
        write_row(out, self.golden.iter().copied())
    }
}

fn write_row<W: Write>(out: &mut W, values: impl Iterator<Item = i32>) -> io::Result<()> {
    let mut first = true;
    for v in values {
        if first {
            first = false;
        } else {
            out.write_all(b" ")?;
        }
        write!(out, "{}", v)?;
    }
    out.write_all(b"\n")
}

/// Statistics from a completed run, for the completion report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenReport {
    pub cases: usize,
    pub pairs: usize,
    pub lines: usize,
}

/// Samples random (activation, weight) pairs and accumulates golden
/// references.
///
/// Owns the two enumerated universes and an injected random source, so
/// seeded runs are fully deterministic.
pub struct VectorGenerator<R: Rng> {
    config: GenConfig,
    activations: Universe,
    weights: Universe,
    rng: R,
}

impl<R: Rng> VectorGenerator<R> {
    /// Enumerate both operand universes. Fails on a zero digit width
    /// before any output is touched.
    pub fn new(config: GenConfig, rng: R) -> io::Result<Self> {
        let activations = Universe::enumerate(config.activation_width)?;
        let weights = Universe::enumerate(config.weight_width)?;
        Ok(VectorGenerator {
            config,
            activations,
            weights,
            rng,
        })
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Generate one test case. The accumulation matrix starts at all zeros
    /// for every case and is updated additively only within that case's
    /// window.
    pub fn next_case(&mut self) -> TestCase {
        let a_width = self.config.activation_width;
        let w_width = self.config.weight_width;
        let pairs = self.config.pairs_per_case();

        let mut rows = Vec::with_capacity(pairs);
        let mut golden = vec![0i32; self.config.golden_len()];

        for _ in 0..pairs {
            let a = self.activations.sample(&mut self.rng).clone();
            let w = self.weights.sample(&mut self.rng).clone();

            for k in 0..a_width {
                for m in 0..w_width {
                    golden[k * w_width + m] += (a[k] * w[m]).to_i8() as i32;
                }
            }

            let mut row = a;
            row.extend_from_slice(&w);
            rows.push(row);
        }

        TestCase {
            activation_width: a_width,
            weight_width: w_width,
            rows,
            golden,
        }
    }

    /// Emit the configured number of test cases to a sink, in order, and
    /// flush. Each case is appended after the previous one; nothing already
    /// written is revisited.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<GenReport> {
        let mut report = GenReport::default();
        for _ in 0..self.config.test_count {
            let case = self.next_case();
            case.write_to(out)?;
            report.cases += 1;
            report.pairs += case.rows.len();
            report.lines += case.rows.len() + 1;
        }
        out.flush()?;
        Ok(report)
    }
}

/// Run a full generation into a fresh file at `path`.
///
/// The file is created (truncating any previous artifact) only after both
/// universes enumerate successfully, held open for the whole run, and
/// flushed before return.
pub fn generate_to_path<R: Rng, P: AsRef<Path>>(
    config: &GenConfig,
    rng: R,
    path: P,
) -> io::Result<GenReport> {
    let mut generator = VectorGenerator::new(config.clone(), rng)?;
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    let report = generator.run(&mut out)?;
    out.into_inner().map_err(|e| e.into_error())?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn recompute_golden(case: &TestCase) -> Vec<i32> {
        let a_w = case.activation_width;
        let w_w = case.weight_width;
        let mut acc = vec![0i32; a_w * w_w];
        for row in &case.rows {
            let (a, w) = row.split_at(a_w);
            for k in 0..a_w {
                for m in 0..w_w {
                    acc[k * w_w + m] += (a[k].to_i8() * w[m].to_i8()) as i32;
                }
            }
        }
        acc
    }

    #[test]
    fn test_golden_matches_direct_recomputation() {
        let mut gen =
            VectorGenerator::new(GenConfig::default(), StdRng::seed_from_u64(42)).unwrap();
        for _ in 0..5 {
            let case = gen.next_case();
            assert_eq!(case.golden, recompute_golden(&case));
        }
    }

    #[test]
    fn test_case_shape_follows_config() {
        let config = GenConfig {
            activation_width: 2,
            weight_width: 4,
            simd_factor: 3,
            window_size: 5,
            test_count: 1,
        };
        let mut gen = VectorGenerator::new(config.clone(), StdRng::seed_from_u64(1)).unwrap();
        let case = gen.next_case();
        assert_eq!(case.rows.len(), 15);
        for row in &case.rows {
            assert_eq!(row.len(), 6);
        }
        assert_eq!(case.golden.len(), 8);
        assert!(case.golden.iter().all(|&v| v.abs() <= 15));
    }

    #[test]
    fn test_each_case_accumulates_from_zero() {
        // A case generated after many others must carry no state over:
        // its golden is recomputable from its own rows alone.
        let mut gen =
            VectorGenerator::new(GenConfig::default(), StdRng::seed_from_u64(9)).unwrap();
        for _ in 0..9 {
            gen.next_case();
        }
        let late = gen.next_case();
        assert_eq!(late.golden, recompute_golden(&late));
    }

    #[test]
    fn test_serialized_layout() {
        let config = GenConfig {
            activation_width: 3,
            weight_width: 3,
            simd_factor: 1,
            window_size: 1,
            test_count: 1,
        };
        let mut gen = VectorGenerator::new(config.clone(), StdRng::seed_from_u64(3)).unwrap();
        let mut buf: Vec<u8> = Vec::new();
        let report = gen.run(&mut buf).unwrap();
        assert_eq!(report, GenReport { cases: 1, pairs: 1, lines: 2 });

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let stim: Vec<i32> = lines[0]
            .split(' ')
            .map(|f| f.parse().unwrap())
            .collect();
        let golden: Vec<i32> = lines[1]
            .split(' ')
            .map(|f| f.parse().unwrap())
            .collect();
        assert_eq!(stim.len(), 6);
        assert_eq!(golden.len(), 9);
        assert!(stim.iter().all(|v| (-1..=1).contains(v)));

        // Single pair: golden[k*3+m] is exactly a[k]*w[m].
        for k in 0..3 {
            for m in 0..3 {
                assert_eq!(golden[k * 3 + m], stim[k] * stim[3 + m]);
            }
        }
    }

    #[test]
    fn test_seeded_runs_are_byte_identical() {
        let config = GenConfig::default();
        let mut first: Vec<u8> = Vec::new();
        let mut second: Vec<u8> = Vec::new();
        VectorGenerator::new(config.clone(), StdRng::seed_from_u64(1234))
            .unwrap()
            .run(&mut first)
            .unwrap();
        VectorGenerator::new(config, StdRng::seed_from_u64(1234))
            .unwrap()
            .run(&mut second)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_width_fails_before_any_output() {
        let config = GenConfig {
            activation_width: 0,
            ..GenConfig::default()
        };
        let err = VectorGenerator::new(config, StdRng::seed_from_u64(0))
            .err()
            .expect("zero activation width must fail");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let config = GenConfig {
            weight_width: 0,
            ..GenConfig::default()
        };
        let err = VectorGenerator::new(config, StdRng::seed_from_u64(0))
            .err()
            .expect("zero weight width must fail");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
