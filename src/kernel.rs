//! Module implementing the three fixed demo kernels.
//!
//! Every kernel has [KERNEL_LEN] non-negative taps and is normalized to sum
//! to 1, so convolving with it preserves the scale of the signal.

use std::fmt;

use crate::error::DemoError;
use crate::KERNEL_LEN;

/// The number of nonzero taps of the boxcar kernel.
pub const BOXCAR_WIDTH: usize = 9;
/// The half-range of the Gaussian sampling grid, i.e., exp(-x^2) is sampled
/// over [-GAUSSIAN_RANGE, GAUSSIAN_RANGE].
const GAUSSIAN_RANGE: f64 = 2.0;
/// The decay constant of the exponential kernel, in samples.
const EXPONENTIAL_TAU: f64 = 3.0;

/// The three kernel shapes of the demo.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KernelKind {
    /// Uniform weight over a sub-window, zero elsewhere.
    Boxcar,
    /// Symmetric bell, exp(-x^2) sampled over [-2, 2].
    Gaussian,
    /// One-sided decay, exp(-i / 3). Flipped during convolution, which puts
    /// the decay after the spike (calcium-like response).
    Exponential,
}

impl KernelKind {
    /// Parse a kernel selector, as given on the command line.
    pub fn from_str(name: &str) -> Result<Self, DemoError> {
        match name {
            "boxcar" => Ok(KernelKind::Boxcar),
            "gaussian" => Ok(KernelKind::Gaussian),
            "exponential" => Ok(KernelKind::Exponential),
            _ => Err(DemoError::UnknownKernel(name.to_string())),
        }
    }

    /// Returns the display name of the kernel.
    pub fn label(&self) -> &'static str {
        match self {
            KernelKind::Boxcar => "Boxcar (Uniform)",
            KernelKind::Gaussian => "Gaussian",
            KernelKind::Exponential => "Exponential (Calcium-like)",
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KernelKind::Boxcar => write!(f, "boxcar"),
            KernelKind::Gaussian => write!(f, "gaussian"),
            KernelKind::Exponential => write!(f, "exponential"),
        }
    }
}

/// Represents a named, normalized convolution kernel.
#[derive(Debug, PartialEq, Clone)]
pub struct Kernel {
    kind: KernelKind,
    weights: Vec<f64>,
}

impl Kernel {
    /// Create the kernel of the given kind. Deterministic (fixed formulas),
    /// calling it twice yields identical kernels.
    pub fn new(kind: KernelKind) -> Self {
        let weights = match kind {
            KernelKind::Boxcar => boxcar_weights(),
            KernelKind::Gaussian => gaussian_weights(),
            KernelKind::Exponential => exponential_weights(),
        };
        Kernel { kind, weights }
    }

    /// Returns the kind of the kernel.
    pub fn kind(&self) -> KernelKind {
        self.kind
    }

    /// Returns the weights of the kernel.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the number of taps of the kernel.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the kernel has no taps.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the weights in left-right-reversed order, as slid under the
    /// standard convolution definition (distinct from cross-correlation).
    pub fn flipped(&self) -> Vec<f64> {
        self.weights.iter().rev().copied().collect()
    }
}

fn boxcar_weights() -> Vec<f64> {
    let mut weights = vec![0.0; KERNEL_LEN];
    for w in weights.iter_mut().take(BOXCAR_WIDTH) {
        *w = 1.0;
    }
    normalize(weights)
}

fn gaussian_weights() -> Vec<f64> {
    let step = 2.0 * GAUSSIAN_RANGE / (KERNEL_LEN - 1) as f64;
    let weights = (0..KERNEL_LEN)
        .map(|i| {
            let x = -GAUSSIAN_RANGE + i as f64 * step;
            (-x * x).exp()
        })
        .collect();
    normalize(weights)
}

fn exponential_weights() -> Vec<f64> {
    let weights = (0..KERNEL_LEN)
        .map(|i| (-(i as f64) / EXPONENTIAL_TAU).exp())
        .collect();
    normalize(weights)
}

// Divide by the tap sum so the kernel sums to 1.
fn normalize(mut weights: Vec<f64>) -> Vec<f64> {
    let sum: f64 = weights.iter().sum();
    for w in weights.iter_mut() {
        *w /= sum;
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::KERNEL_TOLERANCE;

    const KINDS: [KernelKind; 3] = [
        KernelKind::Boxcar,
        KernelKind::Gaussian,
        KernelKind::Exponential,
    ];

    #[test]
    fn test_kernels_are_normalized() {
        for kind in KINDS {
            let kernel = Kernel::new(kind);
            assert_eq!(kernel.len(), KERNEL_LEN);
            assert!(kernel.weights().iter().all(|&w| w >= 0.0));
            assert_relative_eq!(
                kernel.weights().iter().sum::<f64>(),
                1.0,
                epsilon = KERNEL_TOLERANCE
            );
        }
    }

    #[test]
    fn test_boxcar_weights() {
        let kernel = Kernel::new(KernelKind::Boxcar);
        for &w in &kernel.weights()[..BOXCAR_WIDTH] {
            assert_relative_eq!(w, 1.0 / BOXCAR_WIDTH as f64, epsilon = KERNEL_TOLERANCE);
        }
        for &w in &kernel.weights()[BOXCAR_WIDTH..] {
            assert_eq!(w, 0.0);
        }
    }

    #[test]
    fn test_gaussian_weights() {
        let kernel = Kernel::new(KernelKind::Gaussian);
        let weights = kernel.weights();

        // Symmetric bell peaking at the center tap (x = 0)
        for i in 0..KERNEL_LEN {
            assert_relative_eq!(weights[i], weights[KERNEL_LEN - 1 - i], epsilon = 1e-12);
            assert!(weights[i] <= weights[KERNEL_LEN / 2]);
        }

        // exp(-x^2) at x = -2 relative to x = 0
        assert_relative_eq!(
            weights[0] / weights[KERNEL_LEN / 2],
            (-4.0_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_exponential_weights() {
        let kernel = Kernel::new(KernelKind::Exponential);
        let weights = kernel.weights();

        // Strictly decreasing with constant ratio exp(-1/3) between taps
        for pair in weights.windows(2) {
            assert!(pair[1] < pair[0]);
            assert_relative_eq!(pair[1] / pair[0], (-1.0_f64 / 3.0).exp(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_flipped_reverses_weights() {
        let kernel = Kernel::new(KernelKind::Exponential);
        let flipped = kernel.flipped();
        assert_eq!(flipped.len(), kernel.len());
        for i in 0..kernel.len() {
            assert_eq!(flipped[i], kernel.weights()[kernel.len() - 1 - i]);
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(KernelKind::from_str("boxcar"), Ok(KernelKind::Boxcar));
        assert_eq!(KernelKind::from_str("gaussian"), Ok(KernelKind::Gaussian));
        assert_eq!(
            KernelKind::from_str("exponential"),
            Ok(KernelKind::Exponential)
        );
        assert_eq!(
            KernelKind::from_str("unknown"),
            Err(DemoError::UnknownKernel("unknown".to_string()))
        );
        assert_eq!(
            KernelKind::from_str("Boxcar"),
            Err(DemoError::UnknownKernel("Boxcar".to_string()))
        );
    }
}
