//! SIMD-assisted kernels.
//!
//! These use the `wide` crate for portable SIMD operations.

use wide::f64x4;

/// Split consecutive price changes into gains and losses.
///
/// Returns two vectors of length `data.len() - 1` (empty for fewer than two
/// prices). A gain is the positive part of a change and a loss the negative
/// part as a positive number, so `gain - loss == change`.
///
/// A `NaN` change always lands in the loss vector, so the Wilder averages
/// built on top of it go `NaN` from that point on.
pub fn gains_losses_simd(data: &[f64]) -> (Vec<f64>, Vec<f64>) {
    if data.len() < 2 {
        return (vec![], vec![]);
    }

    let changes = data.len() - 1;
    let mut gains = Vec::with_capacity(changes);
    let mut losses = Vec::with_capacity(changes);

    let chunks = changes / 4;
    let zero = f64x4::splat(0.0);

    for i in 0..chunks {
        let idx = i * 4;
        let prev = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        let curr = f64x4::new([
            data[idx + 1],
            data[idx + 2],
            data[idx + 3],
            data[idx + 4],
        ]);

        let diff = curr - prev;
        let gain_vec = diff.max(zero);
        let loss_vec = gain_vec - diff;

        gains.extend(gain_vec.to_array());
        losses.extend(loss_vec.to_array());
    }

    // Handle remaining elements
    for i in (chunks * 4)..changes {
        let change = data[i + 1] - data[i];
        let gain = if change > 0.0 { change } else { 0.0 };
        gains.push(gain);
        losses.push(gain - change);
    }

    (gains, losses)
}
