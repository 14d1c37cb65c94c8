//! Module implementing frame generation for the convolution animation.
//!
//! Frame computation is decoupled from the rendering layer: [Animation]
//! yields plain [FrameState] records that any display can consume, either one
//! at a time with [Animation::frame] or as a finite, restartable sequence
//! with [Animation::frames].
//!
//! The sliding-window highlight is clamped at the left edge of the signal
//! only; near the end of the frame range its right edge exceeds the signal
//! length. The asymmetry is kept on purpose to match the original demo, and
//! the positioned kernel overlay is truncated by slicing instead.

use log::debug;

use crate::convolution::convolve_same;
use crate::kernel::Kernel;
use crate::spike_train::SpikeTrain;

/// The visual scale applied to the positioned kernel overlay, for visibility.
pub const OVERLAY_SCALE: f64 = 1.2;

/// Represents the visual state of a single animation frame.
#[derive(Debug, PartialEq, Clone)]
pub struct FrameState {
    /// The current center position of the kernel on the signal.
    pub pos: usize,
    /// The left edge of the sliding-window highlight, clamped at the start of
    /// the signal (never negative).
    pub window_start: usize,
    /// The right edge (exclusive) of the sliding-window highlight. Only the
    /// left edge is clamped, so this may exceed the signal length (see the
    /// module notes).
    pub window_end: usize,
    /// A left-right-reversed copy of the kernel placed at the visible window,
    /// same length as the signal, zero elsewhere.
    pub positioned_kernel: Vec<f64>,
    /// The number of convolution samples revealed so far, i.e., the prefix
    /// up to and including `pos`.
    pub revealed: usize,
    /// The convolution output at the current position.
    pub current: f64,
}

/// Drives the animation: owns the spike train, the kernel and the full
/// convolution output, which is computed exactly once per animation.
#[derive(Debug, PartialEq, Clone)]
pub struct Animation {
    signal: SpikeTrain,
    kernel: Kernel,
    convolution: Vec<f64>,
}

impl Animation {
    /// Create an animation for the given spike train and kernel. The full
    /// convolution is computed here, once; every frame only slices it.
    /// The kernel must be no longer than the signal (true by construction
    /// for the demo data).
    pub fn new(signal: SpikeTrain, kernel: Kernel) -> Self {
        debug_assert!(kernel.len() <= signal.len());
        let convolution = convolve_same(signal.samples(), kernel.weights());
        debug!(
            "animation ready: {} frames, {} kernel",
            signal.len(),
            kernel.kind()
        );
        Animation {
            signal,
            kernel,
            convolution,
        }
    }

    /// Returns the spike train of the animation.
    pub fn signal(&self) -> &SpikeTrain {
        &self.signal
    }

    /// Returns the kernel of the animation.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Returns the full convolution output.
    pub fn convolution(&self) -> &[f64] {
        &self.convolution
    }

    /// Returns the number of frames, one per signal sample.
    pub fn num_frames(&self) -> usize {
        self.signal.len()
    }

    /// Computes the visual state of the frame centered at `pos`.
    pub fn frame(&self, pos: usize) -> FrameState {
        let num = self.signal.len();
        let half = self.kernel.len() / 2;

        // Clamped at the left edge of the signal only.
        let window_start = pos.saturating_sub(half);
        let window_end = window_start + self.kernel.len();

        // Place the reversed kernel into the visible part of the window.
        let kernel_start = window_start;
        let kernel_end = usize::min(num, pos + half + 1);
        let k_start = half.saturating_sub(pos);
        let k_end = k_start + (kernel_end - kernel_start);

        let flipped = self.kernel.flipped();
        let mut positioned_kernel = vec![0.0; num];
        positioned_kernel[kernel_start..kernel_end].copy_from_slice(&flipped[k_start..k_end]);

        FrameState {
            pos,
            window_start,
            window_end,
            positioned_kernel,
            revealed: pos + 1,
            current: self.convolution[pos],
        }
    }

    /// Returns a lazy, finite sequence of the frame states in display order.
    /// Calling this again restarts the sequence from frame 0.
    pub fn frames(&self) -> Frames<'_> {
        Frames {
            animation: self,
            pos: 0,
        }
    }
}

/// Iterator over the frame states of an animation.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    animation: &'a Animation,
    pos: usize,
}

impl Iterator for Frames<'_> {
    type Item = FrameState;

    fn next(&mut self) -> Option<FrameState> {
        if self.pos >= self.animation.num_frames() {
            return None;
        }
        let frame = self.animation.frame(self.pos);
        self.pos += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.animation.num_frames() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}
