use std::path::PathBuf;
use uuid::Uuid;

use voxtex_builder::{BuildConfig, TextureBuilder};
use voxtex_common::VolumeDims;
use voxtex_publish::{Publisher, TextureId};
use voxtex_store::SampleSource;

/// Unique identifier for one build session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.8}", self.0.to_string())
    }
}

/// Per-session pipeline configuration, captured once at construction.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub build: BuildConfig,
    /// Name the finished texture is registered under.
    pub name: String,
    /// Destination for the durable texture file.
    pub destination: Option<PathBuf>,
    /// Whether the durable file is written at all. Both this and a
    /// destination must be set for persistence to happen.
    pub store_file: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            name: "volume".into(),
            destination: None,
            store_file: true,
        }
    }
}

/// What a completed session produced.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub session: SessionId,
    /// Library id of the published texture; None when the volume was empty
    /// or publication failed.
    pub texture_id: Option<TextureId>,
    pub dims: Option<VolumeDims>,
}

/// One-shot notification fired when a session completes.
pub type CompletionHook = Box<dyn FnOnce(&BuildOutcome) + Send>;

/// Owns one build session end to end.
///
/// The host calls [`tick`] once per frame. The pipeline forwards to the
/// builder; at the tick where progress first reaches 1 it hands the finished
/// buffer to the publisher (durable file, registry, undo journal) and fires
/// the completion hook, exactly once. Later ticks keep returning 1 and do
/// nothing else.
///
/// [`tick`]: BuildPipeline::tick
pub struct BuildPipeline {
    session: SessionId,
    config: PipelineConfig,
    builder: TextureBuilder,
    publisher: Publisher,
    hook: Option<CompletionHook>,
    outcome: Option<BuildOutcome>,
}

impl BuildPipeline {
    pub fn new(config: PipelineConfig, publisher: Publisher) -> Self {
        let session = SessionId::new();
        tracing::debug!(%session, ?config, "build session created");
        Self {
            session,
            builder: TextureBuilder::new(config.build.clone()),
            config,
            publisher,
            hook: None,
            outcome: None,
        }
    }

    /// Attach the one-shot completion hook for this session.
    pub fn on_completion(mut self, hook: impl FnOnce(&BuildOutcome) + Send + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn progress(&self) -> f32 {
        self.builder.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    /// Outcome of the session, once complete.
    pub fn outcome(&self) -> Option<&BuildOutcome> {
        self.outcome.as_ref()
    }

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    pub fn publisher_mut(&mut self) -> &mut Publisher {
        &mut self.publisher
    }

    /// Read access to the underlying builder, for inspection.
    pub fn builder(&self) -> &TextureBuilder {
        &self.builder
    }

    /// Advance the session by one cooperative tick.
    pub fn tick(&mut self, source: Option<&dyn SampleSource>) -> f32 {
        let progress = self.builder.advance(source);
        if progress >= 1.0 && self.outcome.is_none() {
            self.complete();
        }
        progress
    }

    fn complete(&mut self) {
        let mut outcome = BuildOutcome {
            session: self.session,
            texture_id: None,
            dims: None,
        };

        if let Some(texture) = self.builder.take_texture() {
            outcome.dims = Some(texture.dims());
            let destination = if self.config.store_file {
                self.config.destination.as_deref()
            } else {
                None
            };
            match self
                .publisher
                .publish(&self.config.name, texture, destination)
            {
                Ok(id) => outcome.texture_id = Some(id),
                // Persistence failure belongs to the host; the session
                // still completes.
                Err(e) => {
                    tracing::warn!(session = %self.session, error = %e, "publication failed")
                }
            }
        }

        tracing::info!(
            session = %self.session,
            texture_id = ?outcome.texture_id,
            dims = ?outcome.dims,
            "build session complete"
        );
        if let Some(hook) = self.hook.take() {
            hook(&outcome);
        }
        self.outcome = Some(outcome);
    }
}
