use std::time::{Duration, Instant};

use voxtex_common::TexelBuffer;
use voxtex_store::{SampleCursor, SampleSource};

use crate::quantize::quantize;

/// Build configuration, captured once per session and immutable after that.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Round each allocated axis up to the next power of two.
    pub power_of_two: bool,
    /// Maximum number of samples consumed per `advance` call.
    pub batch_size: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            power_of_two: false,
            batch_size: 10,
        }
    }
}

/// Per-tick build statistics for instrumentation.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    pub samples_this_tick: usize,
    pub total_consumed: usize,
    pub tick_time: Duration,
}

/// Incremental volume texture builder.
///
/// One builder instance runs one session: the caller invokes [`advance`]
/// once per scheduling tick until it returns 1, then takes the finished
/// buffer. The builder owns the destination buffer and the stream cursor
/// between ticks; it never blocks, threads, or suspends.
///
/// [`advance`]: TextureBuilder::advance
pub struct TextureBuilder {
    config: BuildConfig,
    texels: Option<TexelBuffer>,
    cursor: Option<SampleCursor>,
    progress: f32,
    stats: BuildStats,
}

impl TextureBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            texels: None,
            cursor: None,
            progress: 0.0,
            stats: BuildStats::default(),
        }
    }

    /// Configuration this session was started with.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Progress in [0, 1]. Exactly 1 only once the session has finalized.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the session has finalized.
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Whether a cursor is currently open (iteration phase in flight).
    pub fn in_session(&self) -> bool {
        self.cursor.is_some()
    }

    /// The destination buffer, if one has been allocated.
    pub fn texture(&self) -> Option<&TexelBuffer> {
        self.texels.as_ref()
    }

    /// Statistics from the last `advance` call.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Transfer ownership of the finished buffer to the caller.
    /// Returns None until the session has finalized.
    pub fn take_texture(&mut self) -> Option<TexelBuffer> {
        if !self.is_finished() {
            return None;
        }
        self.texels.take()
    }

    /// Run one bounded step of the build and return the session progress.
    ///
    /// Consumes at most `batch_size` samples from the source's stream. The
    /// first call opens the cursor and allocates the (quantized) destination
    /// buffer; the call that consumes the stream sentinel finalizes and
    /// returns exactly 1. An absent source or one reporting zero samples
    /// finalizes immediately with no buffer. Calls after completion are
    /// harmless and keep returning 1.
    pub fn advance(&mut self, source: Option<&dyn SampleSource>) -> f32 {
        let _span = tracing::debug_span!("build_advance").entered();
        let tick_start = Instant::now();

        if self.is_finished() {
            return self.finalize(tick_start, 0);
        }

        let Some(source) = source else {
            return self.finalize(tick_start, 0);
        };
        let total = source.sample_count();
        if total == 0 {
            return self.finalize(tick_start, 0);
        }

        if self.cursor.is_none() {
            self.cursor = Some(source.open_cursor());
            self.progress = 0.0;
            tracing::debug!(total, "build session opened");
        }

        if self.texels.is_none() {
            let requested = source.extent();
            let actual = quantize(requested, self.config.power_of_two);
            if actual.has_zero_axis() {
                // Zero-extent volume: not buildable yet, retry next tick.
                tracing::debug!(?requested, "zero-extent volume, stalling");
                self.record_stats(tick_start, 0);
                return self.progress;
            }
            tracing::debug!(?requested, ?actual, "allocating texel buffer");
            self.texels = Some(TexelBuffer::new(actual));
        }

        let mut consumed_this_tick = 0;
        if let Some(texels) = self.texels.as_mut() {
            for _ in 0..self.config.batch_size {
                let Some(cursor) = self.cursor.as_mut() else {
                    break;
                };
                let sample = cursor.next_sample();
                if sample.is_sentinel() {
                    self.cursor = None;
                    break;
                }
                consumed_this_tick += 1;
                // Indexed by the allocated dims, not the requested ones.
                if !texels.set(sample.x, sample.y, sample.z, sample.color) {
                    tracing::warn!(
                        x = sample.x,
                        y = sample.y,
                        z = sample.z,
                        "sample outside allocated texture skipped"
                    );
                }
            }
        }

        if let Some(cursor) = &self.cursor {
            let consumed = cursor.consumed();
            // The +1 keeps this strictly below 1 while samples remain;
            // progress 1 is reserved for true completion.
            self.progress = consumed as f32 / (total as f32 + 1.0);
            self.record_stats(tick_start, consumed_this_tick);
            tracing::trace!(progress = self.progress, consumed, "build tick");
            return self.progress;
        }

        self.finalize(tick_start, consumed_this_tick)
    }

    /// Seal the session: the buffer as written becomes the output, the
    /// cursor is cleared (idempotent), and progress is pinned at 1.
    fn finalize(&mut self, tick_start: Instant, samples: usize) -> f32 {
        if !self.is_finished() {
            match &self.texels {
                Some(texels) => tracing::info!(
                    dims = ?texels.dims(),
                    populated = texels.populated(),
                    "texture build complete"
                ),
                None => tracing::info!("build complete with no texture (empty volume)"),
            }
        }
        self.cursor = None;
        self.progress = 1.0;
        self.record_stats(tick_start, samples);
        1.0
    }

    fn record_stats(&mut self, tick_start: Instant, samples: usize) {
        self.stats = BuildStats {
            samples_this_tick: samples,
            total_consumed: self.stats.total_consumed + samples,
            tick_time: tick_start.elapsed(),
        };
    }
}

impl Default for TextureBuilder {
    fn default() -> Self {
        Self::new(BuildConfig::default())
    }
}
