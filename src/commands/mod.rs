//! CLI 命令实现

pub mod serve;

pub use serve::serve_command;
pub use test::{test_command, TestRoute};
