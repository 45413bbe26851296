use crate::core::converter::{render_json, ScoreConverter};
use crate::core::{ConfigProvider, Pipeline, Score, ScoreExtract, Storage};
use crate::utils::error::Result;

pub struct ScorePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    converter: ScoreConverter,
}

impl<S: Storage, C: ConfigProvider> ScorePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let converter = ScoreConverter::new(config.ignored_prefixes().to_vec());
        Self {
            storage,
            config,
            converter,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ScorePipeline<S, C> {
    async fn extract(&self) -> Result<ScoreExtract> {
        tracing::debug!("Opening score: {}", self.config.input_path());
        let reader = self.storage.open_reader(self.config.input_path()).await?;
        let extract = self.converter.read_score(reader).await?;

        tracing::debug!(
            "Read {} lines: {} frames, {} ignored, {} malformed",
            extract.lines_read,
            extract.score.len(),
            extract.ignored_lines,
            extract.malformed_lines
        );
        Ok(extract)
    }

    async fn load(&self, score: &Score) -> Result<String> {
        let output_path = self.config.output_path().to_string();
        let json = render_json(score, self.config.indent())?;

        tracing::debug!("Writing {} bytes of JSON to {}", json.len(), output_path);
        self.storage.write_file(&output_path, &json).await?;

        Ok(output_path)
    }
}
