//! Module implementing the synthetic spike train driving the demo.

use itertools::Itertools;

use crate::SIGNAL_LEN;

/// The sample indices of the isolated unit spikes.
pub const SINGLE_SPIKES: [usize; 3] = [15, 35, 75];
/// The sample indices of the first burst (3 spikes close together).
pub const BURST_1: [usize; 3] = [48, 50, 52];
/// The sample indices of the second burst (4 spikes).
pub const BURST_2: [usize; 4] = [85, 87, 88, 90];

/// Represents a fixed-length spike train, i.e., a mostly-zero sequence of
/// samples with unit impulses at the spike locations.
#[derive(Debug, PartialEq, Clone)]
pub struct SpikeTrain {
    samples: Vec<f64>,
}

impl SpikeTrain {
    /// Create the demo spike train: three single spikes and two short bursts
    /// over [SIGNAL_LEN] samples. Deterministic, calling it twice yields
    /// identical trains.
    pub fn demo() -> Self {
        let mut samples = vec![0.0; SIGNAL_LEN];
        for &i in SINGLE_SPIKES.iter().chain(&BURST_1).chain(&BURST_2) {
            samples[i] = 1.0;
        }
        SpikeTrain { samples }
    }

    /// Returns the samples of the spike train.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the number of samples of the spike train.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the spike train has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the indices of the spikes, in increasing order.
    pub fn spike_indices(&self) -> Vec<usize> {
        self.samples.iter().positions(|&s| s != 0.0).collect()
    }
}
