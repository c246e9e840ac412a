//! gptrelay 命令行入口
//!
//! # 命令行接口
//!
//! - `serve`: 启动 HTTP 服务器
//! - `test`: 向本地服务器发送测试请求

use anyhow::Result;
use clap::{Parser, Subcommand};
use gptrelay::commands::{self, TestRoute};
use gptrelay::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// gptrelay CLI
#[derive(Parser)]
#[command(name = "gptrelay")]
#[command(about = "Azure OpenAI plain-text relay", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// 可用的命令
#[derive(Subcommand)]
enum Commands {
    /// 启动 HTTP 服务器
    Serve,
    /// 向本地服务器发送测试请求
    Test {
        /// 目标接口
        #[arg(short, long, value_enum, default_value_t = TestRoute::Chat)]
        route: TestRoute,
        /// 测试消息
        #[arg(default_value = "Hello!")]
        message: String,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gptrelay=info".into());
    let json = std::env::var("GPTRELAY_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件（如果存在）
    if let Ok(dotenv_path) = std::env::var("GPTRELAY_ENV_FILE") {
        dotenvy::from_path(&dotenv_path).ok();
    } else {
        dotenvy::dotenv().ok();
    }

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Serve => commands::serve_command(config).await,
        Commands::Test { route, message } => commands::test_command(config, route, message).await,
    }
}
