//! Module implementing "same"-mode discrete convolution.

/// Computes the discrete convolution of a signal and a kernel, keeping the
/// output centered and the same length as the signal.
///
/// The kernel is reversed and slid under the standard convolution definition:
/// `out[i] = sum_t kernel[t] * signal[i + (K - 1) / 2 - t]`, with
/// out-of-bounds signal samples treated as zero. The result is deterministic,
/// i.e., bit-identical across repeated calls with identical inputs.
///
/// The kernel is expected to be no longer than the signal; this is true by
/// construction for the demo data and is not defensively checked.
pub fn convolve_same(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let half = kernel.len().saturating_sub(1) / 2;
    (0..signal.len())
        .map(|i| {
            kernel.iter().enumerate().fold(0.0, |acc, (t, &w)| {
                match (i + half).checked_sub(t) {
                    Some(j) if j < signal.len() => acc + w * signal[j],
                    _ => acc,
                }
            })
        })
        .collect()
}
