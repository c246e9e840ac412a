//! Gateway 应用状态

use std::sync::Arc;

use crate::providers::Provider;

/// Gateway 应用状态
///
/// 启动时构造一次，请求之间只读共享
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn Provider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }
}
