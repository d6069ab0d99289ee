use crate::expression::types::{CompareOp, Expression, LogicalOp, Operand};
use std::fmt;

fn promote(outcome: bool) -> &'static bool {
    if outcome { &true } else { &false }
}

/// 逻辑组合：`( left and right )` / `( left or right )`
///
/// 左操作数总是先求值；右操作数只在短路规则要求时求值。
/// 未被求值的一侧渲染为 `<unknown>`。
#[derive(Debug, Clone)]
pub struct Logical<L, R> {
    left: L,
    op: LogicalOp,
    right: R,
    outcome: Option<bool>,
}

impl<L, R> Logical<L, R> {
    pub fn new(left: L, op: LogicalOp, right: R) -> Self {
        Self {
            left,
            op,
            right,
            outcome: None,
        }
    }

    pub fn op(&self) -> LogicalOp {
        self.op
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Logical<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} {} {} )", self.left, self.op, self.right)
    }
}

impl<L: Expression, R: Expression> Operand for Logical<L, R> {
    type Value = bool;

    fn resolve(&mut self) -> &bool {
        promote(self.evaluate())
    }

    fn is_reached(&self) -> bool {
        self.outcome.is_some()
    }
}

impl<L: Expression, R: Expression> Expression for Logical<L, R> {
    fn evaluate(&mut self) -> bool {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        let left = self.left.evaluate();
        let outcome = if left == self.op.short_circuits_on() {
            left
        } else {
            self.right.evaluate()
        };
        self.outcome = Some(outcome);
        outcome
    }
}

/// 相等比较：`( left == right )` / `( left != right )`
///
/// 两侧总是按左、右顺序读取，只要求 `PartialEq`。
#[derive(Debug, Clone)]
pub struct Equality<L, R> {
    left: L,
    op: CompareOp,
    right: R,
    outcome: Option<bool>,
}

impl<L, R> Equality<L, R> {
    // 只经由 `Compose::equals` / `Compose::not_equals` 构造，运算符必然是相等类
    pub(crate) fn new(left: L, op: CompareOp, right: R) -> Self {
        debug_assert!(op.is_equality(), "{} is not an equality operator", op);
        Self {
            left,
            op,
            right,
            outcome: None,
        }
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Equality<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} {} {} )", self.left, self.op, self.right)
    }
}

impl<L, R> Operand for Equality<L, R>
where
    L: Operand,
    R: Operand,
    L::Value: PartialEq<R::Value>,
{
    type Value = bool;

    fn resolve(&mut self) -> &bool {
        promote(self.evaluate())
    }

    fn is_reached(&self) -> bool {
        self.outcome.is_some()
    }
}

impl<L, R> Expression for Equality<L, R>
where
    L: Operand,
    R: Operand,
    L::Value: PartialEq<R::Value>,
{
    fn evaluate(&mut self) -> bool {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        let equal = {
            let left = self.left.resolve();
            let right = self.right.resolve();
            left == right
        };
        let outcome = match self.op {
            CompareOp::NotEqual => !equal,
            _ => equal,
        };
        self.outcome = Some(outcome);
        outcome
    }
}

/// 大小比较：`<`、`<=`、`>`、`>=`
///
/// 两侧总是求值；不做数值类型提升。
#[derive(Debug, Clone)]
pub struct Relation<L, R> {
    left: L,
    op: CompareOp,
    right: R,
    outcome: Option<bool>,
}

impl<L, R> Relation<L, R> {
    pub(crate) fn new(left: L, op: CompareOp, right: R) -> Self {
        Self {
            left,
            op,
            right,
            outcome: None,
        }
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Relation<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} {} {} )", self.left, self.op, self.right)
    }
}

impl<L, R> Operand for Relation<L, R>
where
    L: Operand,
    R: Operand,
    L::Value: PartialOrd<R::Value>,
{
    type Value = bool;

    fn resolve(&mut self) -> &bool {
        promote(self.evaluate())
    }

    fn is_reached(&self) -> bool {
        self.outcome.is_some()
    }
}

impl<L, R> Expression for Relation<L, R>
where
    L: Operand,
    R: Operand,
    L::Value: PartialOrd<R::Value>,
{
    fn evaluate(&mut self) -> bool {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        let outcome = {
            let left = self.left.resolve();
            let right = self.right.resolve();
            self.op.apply(left, right)
        };
        self.outcome = Some(outcome);
        outcome
    }
}

/// 取反：`( not inner )`
#[derive(Debug, Clone)]
pub struct Negation<E> {
    inner: E,
    outcome: Option<bool>,
}

impl<E> Negation<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            outcome: None,
        }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: fmt::Display> fmt::Display for Negation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( not {} )", self.inner)
    }
}

impl<E: Expression> Operand for Negation<E> {
    type Value = bool;

    fn resolve(&mut self) -> &bool {
        promote(self.evaluate())
    }

    fn is_reached(&self) -> bool {
        self.outcome.is_some()
    }
}

impl<E: Expression> Expression for Negation<E> {
    fn evaluate(&mut self) -> bool {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        let outcome = !self.inner.evaluate();
        self.outcome = Some(outcome);
        outcome
    }
}
