use crate::core::{ConversionReport, Pipeline};
use crate::utils::error::Result;

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ConversionReport> {
        tracing::info!("Reading score...");
        let extract = self.pipeline.extract().await?;
        tracing::info!(
            "Decoded {} frames from {} lines",
            extract.score.len(),
            extract.lines_read
        );

        tracing::info!("Writing JSON...");
        let output_path = self.pipeline.load(&extract.score).await?;
        println!("Success! Converted to {}", output_path);

        Ok(ConversionReport {
            output_path,
            lines_read: extract.lines_read,
            frames: extract.score.len(),
            skipped_lines: extract.ignored_lines + extract.malformed_lines,
        })
    }
}
