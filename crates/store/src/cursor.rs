use voxtex_common::{VolumeDims, VoxelSample};

/// An ordered producer of voxel samples with a count known up front.
///
/// The builder consumes this contract and nothing else about the storage:
/// a total sample count, the requested volume extents, and a cursor that
/// yields samples in a stable order followed by the sentinel.
pub trait SampleSource {
    /// Total number of real samples the stream will produce.
    fn sample_count(&self) -> usize;

    /// Extents of the volume the samples are drawn from (the requested
    /// dimensions of the build).
    fn extent(&self) -> VolumeDims;

    /// Open a cursor at the start of the stream. The cursor snapshots the
    /// stream's content; mutations to the source after this point are not
    /// observed mid-session.
    fn open_cursor(&self) -> SampleCursor;
}

/// A resumable position in a sample stream.
///
/// `next()` yields each real sample once, in stream order, then the sentinel
/// on every call after exhaustion. `consumed()` counts real samples handed
/// out so far, which is what progress reporting is computed from.
#[derive(Debug, Clone)]
pub struct SampleCursor {
    samples: Vec<VoxelSample>,
    consumed: usize,
}

impl SampleCursor {
    /// Build a cursor over an already-ordered sample run.
    pub fn over(samples: Vec<VoxelSample>) -> Self {
        Self {
            samples,
            consumed: 0,
        }
    }

    /// Pull the next sample, or the sentinel once the run is exhausted.
    pub fn next_sample(&mut self) -> VoxelSample {
        match self.samples.get(self.consumed) {
            Some(sample) => {
                self.consumed += 1;
                *sample
            }
            None => VoxelSample::sentinel(),
        }
    }

    /// Number of real samples consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of real samples left before the sentinel.
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxtex_common::Rgba;

    fn sample(x: u32) -> VoxelSample {
        VoxelSample::new(x, 0, 0, Rgba::new(1.0, 1.0, 1.0, 1.0))
    }

    #[test]
    fn cursor_yields_in_order() {
        let mut cursor = SampleCursor::over(vec![sample(0), sample(1), sample(2)]);
        assert_eq!(cursor.next_sample().x, 0);
        assert_eq!(cursor.next_sample().x, 1);
        assert_eq!(cursor.next_sample().x, 2);
        assert_eq!(cursor.consumed(), 3);
    }

    #[test]
    fn exhausted_cursor_yields_sentinel_forever() {
        let mut cursor = SampleCursor::over(vec![sample(0)]);
        cursor.next_sample();
        assert!(cursor.next_sample().is_sentinel());
        assert!(cursor.next_sample().is_sentinel());
        // Sentinel pulls do not advance the consumed count.
        assert_eq!(cursor.consumed(), 1);
    }

    #[test]
    fn empty_cursor_starts_at_sentinel() {
        let mut cursor = SampleCursor::over(Vec::new());
        assert!(cursor.next_sample().is_sentinel());
        assert_eq!(cursor.consumed(), 0);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn remaining_counts_down() {
        let mut cursor = SampleCursor::over(vec![sample(0), sample(1)]);
        assert_eq!(cursor.remaining(), 2);
        cursor.next_sample();
        assert_eq!(cursor.remaining(), 1);
    }
}
