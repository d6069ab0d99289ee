use crate::assertion::{AssertionRecord, SourceLocation};
use std::fmt;
use std::time::Duration;

/// 用例的最终状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStatus {
    /// 所有断言通过，且用例体正常结束
    Pass,
    /// 至少一条断言失败，但用例体正常结束
    Fail,
    /// 用例体异常终止（致命断言、错误或 panic）
    Abort,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Abort => "abort",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 用例异常终止的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortCause {
    /// 致命断言失败
    Assertion(SourceLocation),
    /// 用例体返回了错误
    Error(String),
    /// 用例体 panic
    Panic(String),
}

impl fmt::Display for AbortCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortCause::Assertion(location) => write!(f, "fatal assertion at {}", location),
            AbortCause::Error(message) => write!(f, "error: {}", message),
            AbortCause::Panic(message) => write!(f, "panic: {}", message),
        }
    }
}

/// 单个用例的执行结果
#[derive(Debug, Clone)]
pub struct CaseResult {
    /// 名称路径
    pub name_path: String,

    /// 最终状态
    pub status: CaseStatus,

    /// 用例体执行耗时
    pub duration: Duration,

    /// 断言记录
    pub assertions: AssertionRecord,

    /// 异常终止原因（仅 abort 时存在）
    pub abort_cause: Option<AbortCause>,
}

impl CaseResult {
    pub fn new(
        name_path: String,
        status: CaseStatus,
        duration: Duration,
        assertions: AssertionRecord,
        abort_cause: Option<AbortCause>,
    ) -> Self {
        Self {
            name_path,
            status,
            duration,
            assertions,
            abort_cause,
        }
    }
}

/// 运行摘要
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub aborted: usize,
    pub total_duration: Duration,
    pub total_assertions: usize,
    pub passed_assertions: usize,
    pub failed_assertions: usize,
}

impl RunSummary {
    pub fn from_results(results: &[CaseResult]) -> Self {
        let count = |status: CaseStatus| results.iter().filter(|r| r.status == status).count();

        // 统计断言
        let total_assertions: usize = results.iter().map(|r| r.assertions.len()).sum();
        let passed_assertions: usize = results.iter().map(|r| r.assertions.passed()).sum();

        Self {
            total: results.len(),
            passed: count(CaseStatus::Pass),
            failed: count(CaseStatus::Fail),
            aborted: count(CaseStatus::Abort),
            total_duration: results.iter().map(|r| r.duration).sum(),
            total_assertions,
            passed_assertions,
            failed_assertions: total_assertions - passed_assertions,
        }
    }

    /// 是否所有执行的用例都通过
    pub fn is_success(&self) -> bool {
        self.passed == self.total
    }
}
