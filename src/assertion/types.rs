use std::fmt;
use std::panic::Location;

/// 断言所在的源码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// 调用方的位置（需要在 `#[track_caller]` 链路中调用）
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// 致命断言失败时返回的中止信号
///
/// 通过 `?` 向上传播，由用例执行器识别并把用例标记为 abort。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fatal assertion failed at {location}")]
pub struct Abortion {
    pub location: SourceLocation,
}

/// 单条断言的结果
#[derive(Debug, Clone)]
pub struct AssertionOutcome {
    /// 是否通过
    pub passed: bool,

    /// 渲染后的表达式（只在失败时生成）
    pub expression: Option<String>,

    /// 断言位置
    pub location: SourceLocation,

    /// 是否为致命断言
    pub fatal: bool,
}

impl AssertionOutcome {
    /// 创建成功的断言结果
    pub fn success(location: SourceLocation, fatal: bool) -> Self {
        Self {
            passed: true,
            expression: None,
            location,
            fatal,
        }
    }

    /// 创建失败的断言结果
    pub fn failure(location: SourceLocation, expression: String, fatal: bool) -> Self {
        Self {
            passed: false,
            expression: Some(expression),
            location,
            fatal,
        }
    }
}

/// 一个用例内累积的全部断言结果
#[derive(Debug, Clone, Default)]
pub struct AssertionRecord {
    outcomes: Vec<AssertionOutcome>,
}

impl AssertionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: AssertionOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.passed()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.passed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssertionOutcome> {
        self.outcomes.iter()
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssertionOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

impl<'a> IntoIterator for &'a AssertionRecord {
    type Item = &'a AssertionOutcome;
    type IntoIter = std::slice::Iter<'a, AssertionOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn here() -> SourceLocation {
        SourceLocation {
            file: "tests/sample.rs",
            line: 7,
            column: 5,
        }
    }

    #[test]
    fn test_record_counts() {
        let mut record = AssertionRecord::new();
        assert!(record.is_empty());
        assert!(!record.has_failures());

        record.push(AssertionOutcome::success(here(), false));
        record.push(AssertionOutcome::failure(here(), "( 1 == 2 )".to_string(), false));
        record.push(AssertionOutcome::success(here(), true));

        assert_eq!(record.len(), 3);
        assert_eq!(record.passed(), 2);
        assert_eq!(record.failed(), 1);
        assert!(record.has_failures());
        assert_eq!(
            record.failures().next().and_then(|o| o.expression.as_deref()),
            Some("( 1 == 2 )")
        );
    }

    #[test]
    fn test_location_display() {
        assert_eq!(here().to_string(), "tests/sample.rs:7:5");
        let abortion = Abortion { location: here() };
        assert_eq!(
            abortion.to_string(),
            "fatal assertion failed at tests/sample.rs:7:5"
        );
    }

    #[test]
    fn test_caller_location_points_here() {
        let location = SourceLocation::caller();
        assert!(location.file.ends_with("types.rs"));
        assert!(location.line > 0);
    }
}
