use std::path::Path;

use anyhow::Context as _;

use crate::{
    engine::layout_engine::LayoutEngine,
    foundation::error::LayoutResult,
    metadata::provider::HeightTable,
    model::descriptor::ContentDescriptor,
    strategy::StrategyConfig,
};

/// A complete layout request: content, strategy and measured heights.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutJob {
    /// Content snapshot.
    pub descriptor: ContentDescriptor,
    /// Strategy and its tunables.
    pub layout: StrategyConfig,
    /// Item heights.
    #[serde(default)]
    pub heights: HeightTable,
}

impl LayoutJob {
    /// Parse a job from JSON text.
    pub fn from_json(s: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a job file.
    pub fn load(path: &Path) -> LayoutResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read layout job '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Build an engine for this job and run `prepare`.
    pub fn prepare(&self) -> LayoutResult<LayoutEngine> {
        let mut engine = LayoutEngine::from_config(&self.layout)?;
        engine.prepare(&self.descriptor, &self.heights)?;
        Ok(engine)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/job.rs"]
mod tests;
