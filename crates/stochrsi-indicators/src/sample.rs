//! Fixed sample price series for demos, tests and benches.

/// Sixteen closing prices oscillating narrowly between 83968 and 84170.
pub const SAMPLE_PATTERN: [f64; 16] = [
    84108.71, 84169.82, 84138.83, 84147.58, 84143.41, 84156.24, 84098.49, 84000.01, 83992.83,
    83978.26, 83990.91, 83968.45, 83982.03, 84009.85, 84067.88, 84022.16,
];

/// The sample pattern repeated `cycles` times.
pub fn sample_prices(cycles: usize) -> Vec<f64> {
    SAMPLE_PATTERN.repeat(cycles)
}
