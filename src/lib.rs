//! 单元测试库的求值核心。
//!
//! - [`expression`]：把断言写成普通的布尔表达式，按原生 `&&`/`||` 的短路顺序延迟求值，
//!   失败时渲染出 `( 0 and <unknown> )` 这样的诊断文本。
//! - [`runner`]：逐个执行注册的用例，把断言失败、错误和 panic 隔离为结构化的结果。
//!
//! ```no_run
//! use clean_test::expression::{Compose, lift};
//! use clean_test::framework::Registry;
//!
//! fn main() -> std::process::ExitCode {
//!     let mut registry = Registry::new();
//!     registry.suite("math", |suite| {
//!         suite.test("addition", |o| {
//!             o.expect(lift(1_i32 + 1).equals(2));
//!         });
//!     });
//!     clean_test::main(registry)
//! }
//! ```
pub mod assertion;
pub mod cli;
pub mod config;
pub mod error;
pub mod expression;
pub mod framework;
pub mod logger;
pub mod runner;

// Re-export commonly used types
pub use error::{CleanTestError, Result};

use clap::Parser;
use colored::Colorize;
use config::RunConfig;
use framework::Registry;
use runner::{ConsoleReporter, RunSummary};
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

/// 按配置执行注册表中的用例，并把报告写到 stdout
pub fn run(registry: &Registry, config: &RunConfig) -> Result<RunSummary> {
    let mut reporter = ConsoleReporter::stdout(config.verbose);
    run_with(registry, config, &mut reporter)
}

/// 按配置执行注册表中的用例，报告写到给定的报告器
///
/// 列表模式只打印选中的名称路径，不执行任何用例体。
pub fn run_with<W: Write>(
    registry: &Registry,
    config: &RunConfig,
    reporter: &mut ConsoleReporter<W>,
) -> Result<RunSummary> {
    config.color.apply();
    let executor = config.executor()?;

    let selected: Vec<String> = registry
        .iter()
        .filter(|case| executor.selects(case))
        .map(|case| case.name().to_string())
        .collect();

    if config.list {
        reporter.print_list(selected.iter().map(String::as_str));
        reporter.finish()?;
        return Ok(RunSummary::default());
    }

    reporter.print_header(selected.len());
    let results = executor.execute_all(registry, reporter);
    let summary = RunSummary::from_results(&results);

    if config.verbose || !summary.is_success() {
        reporter.print_results(&results);
    }
    reporter.print_summary(&summary);
    reporter.finish()?;

    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        aborted = summary.aborted,
        "run finished"
    );
    Ok(summary)
}

/// 运行结果对应的进程退出码
///
/// 全部通过返回 0，有失败或中止返回 1，配置或输出错误返回 2。
pub fn exit_code(outcome: &Result<RunSummary>) -> u8 {
    match outcome {
        Ok(summary) if summary.is_success() => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

/// 测试程序入口：解析命令行，执行用例，返回进程退出码
pub fn main(registry: Registry) -> ExitCode {
    logger::init_logger();

    let cli = cli::Cli::parse();
    let outcome = run(&registry, &cli.into());
    if let Err(e) = &outcome {
        eprintln!("{}: {}", "error".red().bold(), e);
    }
    ExitCode::from(exit_code(&outcome))
}
