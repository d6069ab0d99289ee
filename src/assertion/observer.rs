use crate::assertion::types::{Abortion, AssertionOutcome, AssertionRecord, SourceLocation};
use crate::expression::{Expression, Lift};
use crate::runner::Reporter;
use tracing::trace;

/// 断言观察者：用例体内所有断言的落点
///
/// 每条断言都会被求值并记录；失败的断言会立刻渲染并转发给报告器。
/// 用例结束时通过 [`Observer::release`] 交出累积的记录。
pub struct Observer<'a> {
    case: &'a str,
    reporter: &'a mut dyn Reporter,
    record: AssertionRecord,
}

impl<'a> Observer<'a> {
    pub fn new(case: &'a str, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            case,
            reporter,
            record: AssertionRecord::new(),
        }
    }

    /// 当前用例的名称路径
    pub fn case(&self) -> &str {
        self.case
    }

    /// 非致命断言：失败只做记录，用例继续执行
    #[track_caller]
    pub fn expect<E>(&mut self, expression: E) -> bool
    where
        E: Lift,
        E::Node: Expression,
    {
        self.observe(expression.lift(), SourceLocation::caller(), false)
    }

    /// 致命断言：失败时返回 [`Abortion`]，配合 `?` 终止用例
    #[track_caller]
    pub fn require<E>(&mut self, expression: E) -> Result<(), Abortion>
    where
        E: Lift,
        E::Node: Expression,
    {
        let location = SourceLocation::caller();
        if self.observe(expression.lift(), location, true) {
            Ok(())
        } else {
            Err(Abortion { location })
        }
    }

    /// 已记录的断言
    pub fn record(&self) -> &AssertionRecord {
        &self.record
    }

    /// 交出累积的断言记录
    pub fn release(self) -> AssertionRecord {
        self.record
    }

    fn observe<E: Expression>(
        &mut self,
        mut expression: E,
        location: SourceLocation,
        fatal: bool,
    ) -> bool {
        let passed = expression.evaluate();
        trace!(case = self.case, %location, passed, "assertion evaluated");

        let outcome = if passed {
            AssertionOutcome::success(location, fatal)
        } else {
            let outcome = AssertionOutcome::failure(location, expression.to_string(), fatal);
            self.reporter.failure(self.case, &outcome);
            outcome
        };
        self.record.push(outcome);
        passed
    }
}
