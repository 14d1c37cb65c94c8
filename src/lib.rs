//! This crate provides an animated demonstration of 1-D discrete convolution
//! on spike trains, for teaching purposes.
//!
//! A fixed synthetic spike train (single spikes and short bursts) is convolved
//! with one of three normalized kernels (boxcar, Gaussian, exponential), and a
//! three-panel terminal animation shows the kernel sliding over the signal
//! while the convolution output builds up.
//!
//! # Generating the demo data
//!
//! ```rust
//! use spikeconv::spike_train::SpikeTrain;
//! use spikeconv::kernel::{Kernel, KernelKind};
//!
//! let signal = SpikeTrain::demo();
//! assert_eq!(signal.len(), 100);
//! assert_eq!(signal.spike_indices().len(), 10);
//!
//! let kernel = Kernel::new(KernelKind::Gaussian);
//! assert!((kernel.weights().iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```
//!
//! # Walking the animation frames
//!
//! Frame computation is decoupled from rendering: the animation yields a
//! finite, restartable sequence of plain frame-state records that any display
//! layer can consume.
//!
//! ```rust
//! use spikeconv::animation::Animation;
//! use spikeconv::kernel::{Kernel, KernelKind};
//! use spikeconv::spike_train::SpikeTrain;
//!
//! let animation = Animation::new(SpikeTrain::demo(), Kernel::new(KernelKind::Boxcar));
//! let frames: Vec<_> = animation.frames().collect();
//!
//! assert_eq!(frames.len(), 100);
//! assert_eq!(frames[0].window_start, 0);
//! assert_eq!(frames[99].revealed, 100);
//! ```

pub mod animation;
pub mod convolution;
pub mod error;
pub mod kernel;
pub mod spike_train;
pub mod ui;

/// The number of samples in the demo spike train.
pub const SIGNAL_LEN: usize = 100;
/// The number of taps in every demo kernel.
pub const KERNEL_LEN: usize = 15;
/// The tolerance for a kernel to be considered normalized.
pub const KERNEL_TOLERANCE: f64 = 1e-9;
/// The default animation tick interval, in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 100;
