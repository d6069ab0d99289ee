use crate::assertion::AssertionOutcome;
use crate::runner::types::{CaseResult, CaseStatus, RunSummary};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, Table};
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;
use tracing::warn;

/// 报告协作者：接收用例生命周期通知和断言失败详情
///
/// 所有方法都在用例执行的关键路径上同步调用，不应长时间阻塞。
/// 方法内的 panic 会被执行器截获：`start`、`failure` 中的 panic 使用例中止，
/// `stop` 中的 panic 只记录警告。
pub trait Reporter {
    /// 用例开始
    fn start(&mut self, name_path: &str);

    /// 用例体内的一条断言失败
    fn failure(&mut self, name_path: &str, outcome: &AssertionOutcome);

    /// 用例结束
    fn stop(&mut self, name_path: &str, duration: Duration, status: CaseStatus);
}

/// 终端报告器
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    verbose: bool,
    // 第一个写入错误，由 finish 交给调用方
    error: Option<io::Error>,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self {
            out,
            verbose,
            error: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// 打印运行开始
    pub fn print_header(&mut self, total: usize) {
        self.emit(format_args!("\nRunning {} cases...\n", total));
    }

    /// 打印选中的用例名称（不执行）
    pub fn print_list<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        let mut count = 0;
        for name in names {
            self.emit(format_args!("{}", name));
            count += 1;
        }
        self.emit(format_args!("\n{} cases", count));
    }

    /// 打印每个用例的明细表
    pub fn print_results(&mut self, results: &[CaseResult]) {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Case", "Status", "Assertions", "Duration", "Note"]);

        for result in results {
            let status_color = match result.status {
                CaseStatus::Pass => Color::Green,
                CaseStatus::Fail => Color::Red,
                CaseStatus::Abort => Color::Yellow,
            };
            let note = result
                .abort_cause
                .as_ref()
                .map(|cause| cause.to_string())
                .unwrap_or_default();

            table.add_row(vec![
                Cell::new(&result.name_path),
                Cell::new(result.status).fg(status_color),
                Cell::new(format!(
                    "{}/{}",
                    result.assertions.passed(),
                    result.assertions.len()
                )),
                Cell::new(format!("{}ms", result.duration.as_millis())),
                Cell::new(note).add_attribute(Attribute::Dim),
            ]);
        }

        self.emit(format_args!("{}", table));
    }

    /// 打印运行摘要
    pub fn print_summary(&mut self, summary: &RunSummary) {
        self.emit(format_args!("\n{}", "━".repeat(50)));
        self.emit(format_args!("{}", "Summary".bold()));
        self.emit(format_args!("{}", "━".repeat(50)));

        if summary.failed == 0 && summary.aborted == 0 {
            self.emit(format_args!(
                "  {}: {} passed, {} total",
                "Cases".bold(),
                summary.passed.to_string().green(),
                summary.total
            ));
        } else {
            self.emit(format_args!(
                "  {}: {} passed, {} failed, {} aborted, {} total",
                "Cases".bold(),
                summary.passed.to_string().green(),
                summary.failed.to_string().red(),
                summary.aborted.to_string().yellow(),
                summary.total
            ));
        }

        // 显示断言统计
        if summary.total_assertions > 0 {
            if summary.failed_assertions == 0 {
                self.emit(format_args!(
                    "  {}: {} passed, {} total",
                    "Assertions".bold(),
                    summary.passed_assertions.to_string().green(),
                    summary.total_assertions
                ));
            } else {
                self.emit(format_args!(
                    "  {}: {} passed, {} failed, {} total",
                    "Assertions".bold(),
                    summary.passed_assertions.to_string().green(),
                    summary.failed_assertions.to_string().red(),
                    summary.total_assertions
                ));
            }
        }

        self.emit(format_args!(
            "  {}: {:.3}s\n",
            "Duration".bold(),
            summary.total_duration.as_secs_f64()
        ));
    }

    /// 刷新输出，并返回运行期间遇到的第一个写入错误
    pub fn finish(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("Failed to write report: {}", e);
            self.error.get_or_insert(e);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn start(&mut self, name_path: &str) {
        if self.verbose {
            self.emit(format_args!(" {} {}", "▶".dimmed(), name_path));
        }
    }

    fn failure(&mut self, _name_path: &str, outcome: &AssertionOutcome) {
        let expression = outcome.expression.as_deref().unwrap_or_default();
        let fatal = if outcome.fatal { " (fatal)" } else { "" };
        self.emit(format_args!(
            "   {} {}  {}{}",
            "✗".red(),
            outcome.location.to_string().dimmed(),
            expression.red(),
            fatal.dimmed()
        ));
    }

    fn stop(&mut self, name_path: &str, duration: Duration, status: CaseStatus) {
        let millis = duration.as_millis();
        match status {
            CaseStatus::Pass => {
                if self.verbose {
                    self.emit(format_args!(" {} {} ({}ms)", "✓".green(), name_path, millis));
                }
            }
            CaseStatus::Fail => {
                self.emit(format_args!(" {} {} ({}ms)", "✗".red(), name_path, millis));
            }
            CaseStatus::Abort => {
                self.emit(format_args!(
                    " {} {} ({}ms) {}",
                    "⊘".yellow(),
                    name_path,
                    millis,
                    "(aborted)".dimmed()
                ));
            }
        }
    }
}
