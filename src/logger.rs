use tracing_subscriber::{EnvFilter, fmt};

/// 初始化日志系统
///
/// 支持通过 RUST_LOG 环境变量控制日志级别
/// 默认级别: warn（报告输出在 stdout，日志写入 stderr）
///
/// 示例:
/// - RUST_LOG=debug cargo run --example suite
/// - RUST_LOG=clean_test=trace cargo test
///
/// 重复调用不会报错，已有的全局 subscriber 保持不变。
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let initialized = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok();

    if initialized {
        tracing::debug!("Logger initialized");
    }
}
