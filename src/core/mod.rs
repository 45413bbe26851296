pub mod converter;
pub mod decoder;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{ConversionReport, Frame, Score, ScoreExtract};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
