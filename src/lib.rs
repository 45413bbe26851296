//! Convert pipe-delimited Laban-style movement scores into JSON frame arrays.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, ConversionSettings};

pub use crate::core::{
    converter::ScoreConverter, decoder::decode_block, engine::ConversionEngine,
    pipeline::ScorePipeline,
};
pub use crate::domain::model::{BodyPart, BodyPartDescriptor, ConversionReport, Frame, Score};
pub use crate::utils::error::{ConvertError, Result};

use std::path::Path;

/// Convert the score at `input` into a JSON array written to `output`.
///
/// Relative paths resolve against the current directory. Any existing
/// content at `output` is replaced. Paths that are not valid UTF-8 are
/// rejected before any file is touched.
pub async fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ConversionReport> {
    let settings = ConversionSettings::new(
        utf8_path("input_path", input.as_ref())?,
        utf8_path("output_path", output.as_ref())?,
    );
    let pipeline = ScorePipeline::new(LocalStorage::default(), settings);
    ConversionEngine::new(pipeline).run().await
}

fn utf8_path<'a>(field: &str, path: &'a Path) -> Result<&'a str> {
    path.to_str()
        .ok_or_else(|| ConvertError::InvalidConfigValueError {
            field: field.to_string(),
            value: path.to_string_lossy().into_owned(),
            reason: "Path is not valid UTF-8".to_string(),
        })
}
