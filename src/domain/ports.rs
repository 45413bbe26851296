use crate::domain::model::{Score, ScoreExtract};
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::AsyncBufRead;

pub trait Storage: Send + Sync {
    type Reader: AsyncBufRead + Unpin + Send;

    /// Open `path` for line-by-line reading.
    fn open_reader(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Self::Reader>> + Send;

    /// Replace the whole content at `path` with `data`.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn indent(&self) -> usize;
    fn ignored_prefixes(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ScoreExtract>;
    async fn load(&self, score: &Score) -> Result<String>;
}
