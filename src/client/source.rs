use crate::client::types::StatsFrame;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn open(&mut self) -> Result<()>;

    async fn close(&mut self) -> Result<()>;

    async fn is_open(&self) -> bool;

    async fn fetch_stats(&self) -> Result<StatsFrame>;
}
