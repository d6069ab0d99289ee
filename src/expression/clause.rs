use crate::expression::types::{Expression, Observation, Operand, Truthy, UNKNOWN};
use std::fmt;

/// 叶子表达式节点：包装一个原始值，并记录它是如何被使用的
#[derive(Debug, Clone)]
pub struct Clause<T> {
    value: T,
    observation: Observation,
}

impl<T> Clause<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            observation: Observation::Unreached,
        }
    }

    /// 直接访问承载的值，不影响观测状态
    pub fn value(&self) -> &T {
        &self.value
    }

    /// 修改承载的值，观测状态保持不变
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn observation(&self) -> Observation {
        self.observation
    }

    /// 是否在布尔上下文中被转换过
    pub fn was_converted(&self) -> bool {
        self.observation.was_converted()
    }
}

impl<T: fmt::Display> fmt::Display for Clause<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.observation.is_reached() {
            write!(f, "{}", self.value)
        } else {
            f.write_str(UNKNOWN)
        }
    }
}

impl<T: fmt::Display> Operand for Clause<T> {
    type Value = T;

    fn resolve(&mut self) -> &T {
        if !self.observation.is_reached() {
            self.observation = Observation::Read;
        }
        &self.value
    }

    fn is_reached(&self) -> bool {
        self.observation.is_reached()
    }
}

// 叶子不缓存结果：同一个叶子可以借给多个表达式，每个表达式各自转换一次
impl<T: Truthy + fmt::Display> Expression for Clause<T> {
    fn evaluate(&mut self) -> bool {
        let outcome = self.value.truthy();
        self.observation = Observation::Converted(outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreached_clause_renders_unknown() {
        let clause = Clause::new(17);
        assert_eq!(clause.to_string(), "<unknown>");
        assert_eq!(clause.observation(), Observation::Unreached);
    }

    #[test]
    fn test_resolve_marks_read_without_conversion() {
        let mut clause = Clause::new(17);
        assert_eq!(*clause.resolve(), 17);
        assert_eq!(clause.observation(), Observation::Read);
        assert!(!clause.was_converted());
        assert_eq!(clause.to_string(), "17");
    }

    #[test]
    fn test_evaluate_converts_once() {
        let mut clause = Clause::new(false);
        assert!(!clause.evaluate());
        assert_eq!(clause.observation(), Observation::Converted(false));

        // 之后的读取不会降级观测状态
        clause.resolve();
        assert!(clause.was_converted());
        assert_eq!(clause.to_string(), "false");
    }

    #[test]
    fn test_evaluate_sees_current_value() {
        let mut clause = Clause::new(false);
        assert!(!clause.evaluate());

        *clause.value_mut() = true;
        assert!(clause.evaluate());
        assert_eq!(clause.observation(), Observation::Converted(true));
    }
}
