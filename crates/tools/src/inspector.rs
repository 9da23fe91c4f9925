use voxtex_builder::TextureBuilder;
use voxtex_common::VolumeDims;
use voxtex_store::VoxelStore;

/// Build inspector for developer tooling.
///
/// Provides read-only summaries of builder and store state for debugging
/// and development UI.
pub struct BuildInspector;

impl BuildInspector {
    /// Summarize an in-flight or finished build.
    pub fn summary(builder: &TextureBuilder) -> BuildSummary {
        BuildSummary {
            progress: builder.progress(),
            finished: builder.is_finished(),
            in_session: builder.in_session(),
            dims: builder.texture().map(|t| t.dims()),
            populated: builder.texture().map(|t| t.populated()).unwrap_or(0),
            samples_last_tick: builder.stats().samples_this_tick,
            total_consumed: builder.stats().total_consumed,
        }
    }

    /// Summarize a voxel store.
    pub fn store_summary(store: &VoxelStore) -> StoreSummary {
        StoreSummary {
            extent: store.extent(),
            voxels: store.len(),
        }
    }
}

/// Summary of a build session's state.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub progress: f32,
    pub finished: bool,
    pub in_session: bool,
    pub dims: Option<VolumeDims>,
    pub populated: usize,
    pub samples_last_tick: usize,
    pub total_consumed: usize,
}

impl std::fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dims = match self.dims {
            Some(d) => format!("{}x{}x{}", d.width, d.height, d.depth),
            None => "unallocated".into(),
        };
        write!(
            f,
            "Build: progress={:.3} dims={} populated={} consumed={}",
            self.progress, dims, self.populated, self.total_consumed
        )
    }
}

/// Summary of a voxel store.
#[derive(Debug, Clone)]
pub struct StoreSummary {
    pub extent: VolumeDims,
    pub voxels: usize,
}

impl std::fmt::Display for StoreSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Store: extent={}x{}x{} voxels={}",
            self.extent.width, self.extent.height, self.extent.depth, self.voxels
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxtex_common::Rgba;

    #[test]
    fn summary_of_fresh_builder() {
        let builder = TextureBuilder::default();
        let summary = BuildInspector::summary(&builder);
        assert_eq!(summary.progress, 0.0);
        assert!(!summary.finished);
        assert!(summary.dims.is_none());
    }

    #[test]
    fn summary_tracks_progress() {
        let mut store = VoxelStore::new(VolumeDims::new(5, 5, 1));
        for y in 0..5 {
            for x in 0..5 {
                store.set(x, y, 0, Rgba::new(1.0, 1.0, 1.0, 1.0));
            }
        }
        let mut builder = TextureBuilder::default();
        builder.advance(Some(&store));

        let summary = BuildInspector::summary(&builder);
        assert!(summary.in_session);
        assert!(summary.progress > 0.0 && summary.progress < 1.0);
        assert_eq!(summary.samples_last_tick, 10);
        assert_eq!(summary.dims, Some(VolumeDims::new(5, 5, 1)));
    }

    #[test]
    fn store_summary_counts() {
        let mut store = VoxelStore::new(VolumeDims::new(3, 3, 3));
        store.set(0, 0, 0, Rgba::new(1.0, 0.0, 0.0, 1.0));
        let summary = BuildInspector::store_summary(&store);
        assert_eq!(summary.voxels, 1);
        assert_eq!(summary.extent, VolumeDims::new(3, 3, 3));
    }

    #[test]
    fn summary_display() {
        let builder = TextureBuilder::default();
        let s = format!("{}", BuildInspector::summary(&builder));
        assert!(s.contains("progress=0.000"));
        assert!(s.contains("unallocated"));
    }
}
