//! Sliding-window kernels.
//!
//! Every kernel here produces one value per full window: a window of size `w`
//! over `L` values yields `L - w + 1` outputs, and nothing when `L < w` or
//! `w == 0`. Each output is aligned to the *end* of its window.

use std::collections::VecDeque;

/// Rolling minimum and maximum using monotonic deques.
///
/// O(n) regardless of window size. Inputs are expected to be free of `NaN`.
pub fn rolling_min_max(values: &[f64], window: usize) -> (Vec<f64>, Vec<f64>) {
    if window == 0 || values.len() < window {
        return (vec![], vec![]);
    }

    let len = values.len() - window + 1;
    let mut mins = Vec::with_capacity(len);
    let mut maxs = Vec::with_capacity(len);

    // Indices into `values`; fronts hold the current window extremes.
    let mut min_idx: VecDeque<usize> = VecDeque::with_capacity(window);
    let mut max_idx: VecDeque<usize> = VecDeque::with_capacity(window);

    for (i, &value) in values.iter().enumerate() {
        while min_idx.back().is_some_and(|&j| values[j] >= value) {
            min_idx.pop_back();
        }
        min_idx.push_back(i);

        while max_idx.back().is_some_and(|&j| values[j] <= value) {
            max_idx.pop_back();
        }
        max_idx.push_back(i);

        if i + 1 < window {
            continue;
        }

        let start = i + 1 - window;
        while min_idx.front().is_some_and(|&j| j < start) {
            min_idx.pop_front();
        }
        while max_idx.front().is_some_and(|&j| j < start) {
            max_idx.pop_front();
        }

        mins.push(values[min_idx[0]]);
        maxs.push(values[max_idx[0]]);
    }

    (mins, maxs)
}

/// Rolling arithmetic mean.
///
/// Each window is summed on its own, so equal inputs average back to exactly
/// that value and a `NaN` only affects the windows that contain it.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return vec![];
    }

    let window_f64 = window as f64;
    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window_f64)
        .collect()
}
