//! End-to-end properties of the demo data, the convolution and the frame
//! generation, for all three kernel kinds.

use approx::assert_relative_eq;

use spikeconv::animation::Animation;
use spikeconv::convolution::convolve_same;
use spikeconv::kernel::{Kernel, KernelKind, BOXCAR_WIDTH};
use spikeconv::spike_train::SpikeTrain;
use spikeconv::{KERNEL_LEN, KERNEL_TOLERANCE, SIGNAL_LEN};

const KINDS: [KernelKind; 3] = [
    KernelKind::Boxcar,
    KernelKind::Gaussian,
    KernelKind::Exponential,
];

#[test]
fn signal_has_ten_unit_spikes() {
    let signal = SpikeTrain::demo();
    assert_eq!(signal.len(), SIGNAL_LEN);

    let nonzero: Vec<f64> = signal
        .samples()
        .iter()
        .copied()
        .filter(|&s| s != 0.0)
        .collect();
    assert_eq!(nonzero.len(), 10);
    assert!(nonzero.iter().all(|&s| s == 1.0));
}

#[test]
fn every_kernel_sums_to_one() {
    for kind in KINDS {
        let kernel = Kernel::new(kind);
        assert_eq!(kernel.len(), KERNEL_LEN);
        assert_relative_eq!(
            kernel.weights().iter().sum::<f64>(),
            1.0,
            epsilon = KERNEL_TOLERANCE
        );
    }
}

#[test]
fn boxcar_kernel_end_to_end() {
    let kernel = Kernel::new(KernelKind::Boxcar);
    let weights = kernel.weights();

    assert_eq!(weights.len(), KERNEL_LEN);
    assert!(weights[0] > 0.0);
    assert!(weights[..BOXCAR_WIDTH].iter().all(|&w| w == weights[0]));
    assert!(weights[BOXCAR_WIDTH..].iter().all(|&w| w == 0.0));
    assert_relative_eq!(weights.iter().sum::<f64>(), 1.0, epsilon = KERNEL_TOLERANCE);
}

#[test]
fn convolution_output_matches_signal_length() {
    let signal = SpikeTrain::demo();
    for kind in KINDS {
        let kernel = Kernel::new(kind);
        let out = convolve_same(signal.samples(), kernel.weights());
        assert_eq!(out.len(), SIGNAL_LEN);
    }
}

#[test]
fn convolution_is_deterministic() {
    let signal = SpikeTrain::demo();
    for kind in KINDS {
        let kernel = Kernel::new(kind);
        let first = convolve_same(signal.samples(), kernel.weights());
        let second = convolve_same(signal.samples(), kernel.weights());
        // Bit-identical, not merely close
        assert_eq!(first, second);
    }
}

#[test]
fn convolution_preserves_total_spike_mass() {
    // Every spike sits at least KERNEL_LEN / 2 samples away from both signal
    // edges, so no kernel mass is truncated and the normalized kernels keep
    // the total output mass at one per spike.
    let signal = SpikeTrain::demo();
    for kind in KINDS {
        let kernel = Kernel::new(kind);
        let out = convolve_same(signal.samples(), kernel.weights());
        assert_relative_eq!(out.iter().sum::<f64>(), 10.0, epsilon = 1e-9);
    }
}

#[test]
fn window_clamp_is_left_only() {
    for kind in KINDS {
        let animation = Animation::new(SpikeTrain::demo(), Kernel::new(kind));

        let first = animation.frame(0);
        assert_eq!(first.window_start, 0);

        let last = animation.frame(SIGNAL_LEN - 1);
        assert_eq!(last.window_start, SIGNAL_LEN - 1 - KERNEL_LEN / 2);
        assert!(last.window_end > SIGNAL_LEN);
        assert_eq!(last.window_end - last.window_start, KERNEL_LEN);
    }
}

#[test]
fn frames_reveal_monotonically_and_restart() {
    let animation = Animation::new(SpikeTrain::demo(), Kernel::new(KernelKind::Gaussian));

    let frames: Vec<_> = animation.frames().collect();
    assert_eq!(frames.len(), SIGNAL_LEN);
    for (pos, frame) in frames.iter().enumerate() {
        assert_eq!(frame.pos, pos);
        assert_eq!(frame.revealed, pos + 1);
        assert_eq!(frame.positioned_kernel.len(), SIGNAL_LEN);
    }

    // Restarting the sequence yields identical frame states.
    let replay: Vec<_> = animation.frames().collect();
    assert_eq!(frames, replay);
}
