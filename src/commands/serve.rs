//! Serve 命令 - 启动 HTTP 服务器

use anyhow::Result;

use crate::config::Config;
use crate::gateway;

/// 执行服务器启动命令
///
/// 构造 Azure OpenAI Provider，注册 `/chat`、`/respond` 路由，
/// 等待 Ctrl+C 或 SIGTERM 后优雅关闭
pub async fn serve_command(config: Config) -> Result<()> {
    gateway::serve(config).await
}
