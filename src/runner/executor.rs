use crate::Result;
use crate::assertion::{Abortion, AssertionRecord, Observer};
use crate::framework::{Case, Registry};
use crate::runner::reporter::Reporter;
use crate::runner::types::{AbortCause, CaseResult, CaseStatus};
use regex::Regex;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// 用例体的终止方式
enum Termination {
    Completed,
    Aborted(Abortion),
    Errored(anyhow::Error),
    Panicked(String),
}

impl Termination {
    fn from_error(err: anyhow::Error) -> Self {
        // 中止信号可能被包在 context 里，downcast 会穿透
        match err.downcast::<Abortion>() {
            Ok(abortion) => Termination::Aborted(abortion),
            Err(err) => Termination::Errored(err),
        }
    }

    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Termination::Panicked(panic_message(payload))
    }

    fn classify(self, assertions: &AssertionRecord) -> (CaseStatus, Option<AbortCause>) {
        match self {
            Termination::Completed if assertions.has_failures() => (CaseStatus::Fail, None),
            Termination::Completed => (CaseStatus::Pass, None),
            Termination::Aborted(abortion) => (
                CaseStatus::Abort,
                Some(AbortCause::Assertion(abortion.location)),
            ),
            Termination::Errored(err) => {
                (CaseStatus::Abort, Some(AbortCause::Error(format!("{:#}", err))))
            }
            Termination::Panicked(message) => (CaseStatus::Abort, Some(AbortCause::Panic(message))),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// 用例执行器
#[derive(Debug, Default)]
pub struct CaseExecutor {
    filter: Option<Regex>,
}

impl CaseExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只执行名称路径匹配该正则的用例
    pub fn with_filter(pattern: &str) -> Result<Self> {
        Ok(Self {
            filter: Some(Regex::new(pattern)?),
        })
    }

    /// 用例是否被过滤器选中
    pub fn selects(&self, case: &Case) -> bool {
        match &self.filter {
            Some(filter) => filter.is_match(&case.name().to_string()),
            None => true,
        }
    }

    /// 按注册顺序依次执行所有选中的用例
    pub fn execute_all(&self, registry: &Registry, reporter: &mut dyn Reporter) -> Vec<CaseResult> {
        let mut results = Vec::with_capacity(registry.len());

        for case in registry {
            // 检查是否跳过
            if !self.selects(case) {
                debug!(case = %case.name(), "case filtered out");
                continue;
            }
            results.push(self.execute(case, reporter));
        }

        results
    }

    /// 执行单个用例，任何失败都转换为结果状态，不会向外传播
    ///
    /// 报告器在 `start` 中 panic 时用例体不会执行，用例记为中止；
    /// 在 `stop` 中 panic 只记录警告，不改变已经得出的结果。
    pub fn execute(&self, case: &Case, reporter: &mut dyn Reporter) -> CaseResult {
        let name_path = case.name().to_string();

        debug!(case = %name_path, "case started");
        let (termination, duration, assertions) =
            match panic::catch_unwind(AssertUnwindSafe(|| reporter.start(&name_path))) {
                Ok(()) => Self::run_body(case, &name_path, reporter),
                Err(payload) => (
                    Termination::from_panic(payload),
                    Duration::ZERO,
                    AssertionRecord::new(),
                ),
            };

        let (status, abort_cause) = termination.classify(&assertions);
        if let Some(cause) = &abort_cause {
            warn!(case = %name_path, %cause, "case aborted");
        }
        debug!(case = %name_path, %status, ?duration, "case finished");

        if let Err(payload) =
            panic::catch_unwind(AssertUnwindSafe(|| reporter.stop(&name_path, duration, status)))
        {
            let message = panic_message(payload);
            warn!(case = %name_path, %message, "reporter panicked on stop");
        }
        CaseResult::new(name_path, status, duration, assertions, abort_cause)
    }

    fn run_body(
        case: &Case,
        name_path: &str,
        reporter: &mut dyn Reporter,
    ) -> (Termination, Duration, AssertionRecord) {
        // 开始计时
        let start = Instant::now();

        let mut observer = Observer::new(name_path, reporter);
        let termination = match panic::catch_unwind(AssertUnwindSafe(|| case.run(&mut observer))) {
            Ok(Ok(())) => Termination::Completed,
            Ok(Err(err)) => Termination::from_error(err),
            Err(payload) => Termination::from_panic(payload),
        };
        (termination, start.elapsed(), observer.release())
    }
}
