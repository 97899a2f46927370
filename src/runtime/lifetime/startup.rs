use crate::storage::Storage;
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
///
/// 包括存储初始化与连接探活。客户端连接是惰性的，探活失败不阻止
/// 启动，此后处理程序会把存储错误如实上报。
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");

    match storage.ping().await {
        Ok(()) => {
            warn!("Pinged your deployment. Successfully connected to MongoDB");
        }
        Err(e) => {
            warn!(
                "MongoDB ping failed during startup (continuing, handlers will surface errors): {}",
                e
            );
        }
    }

    StartupContext { storage }
}
