/// 断言模块 - 收集用例体内的断言结果
mod observer;
mod types;

pub use observer::Observer;
pub use types::{Abortion, AssertionOutcome, AssertionRecord, SourceLocation};
