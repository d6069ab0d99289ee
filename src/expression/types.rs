use std::fmt;

/// 未求值操作数的渲染占位符
pub const UNKNOWN: &str = "<unknown>";

/// 逻辑运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And, // and
    Or,  // or
}

impl LogicalOp {
    /// 左操作数取该值时短路，右操作数不再求值
    pub fn short_circuits_on(&self) -> bool {
        match self {
            Self::And => false,
            Self::Or => true,
        }
    }

    /// 转换为字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equal,          // ==
    NotEqual,       // !=
    Greater,        // >
    Less,           // <
    GreaterOrEqual, // >=
    LessOrEqual,    // <=
}

impl CompareOp {
    /// 转换为字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
        }
    }

    /// 是否只需要 `PartialEq`
    pub fn is_equality(&self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }

    /// 按运算符比较两个值
    ///
    /// 排序运算符在不可比较时（如 NaN）返回 false，与原生比较一致。
    pub fn apply<L, R>(&self, left: &L, right: &R) -> bool
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        match self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::Greater => left > right,
            Self::Less => left < right,
            Self::GreaterOrEqual => left >= right,
            Self::LessOrEqual => left <= right,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 叶子节点的观测状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Observation {
    /// 从未被求值（例如被短路跳过）
    #[default]
    Unreached,
    /// 作为原始值被读取（比较运算）
    Read,
    /// 在布尔上下文中被转换，携带转换结果
    Converted(bool),
}

impl Observation {
    pub fn is_reached(&self) -> bool {
        !matches!(self, Self::Unreached)
    }

    pub fn was_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }
}

/// 显式布尔转换能力
///
/// 只有实现了该 trait 的值才能作为逻辑运算的叶子操作数。
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

/// 可参与表达式组合的操作数：可渲染，并且可以读取其承载的值
///
/// 读取会把节点标记为已到达；未到达的节点渲染为 [`UNKNOWN`]。
pub trait Operand: fmt::Display {
    type Value: ?Sized;

    fn resolve(&mut self) -> &Self::Value;

    fn is_reached(&self) -> bool;
}

/// 基础表达式：在 [`Operand`] 之上提供布尔值
///
/// 对同一节点重复调用 `evaluate` 不会重复求值其操作数。
pub trait Expression: Operand {
    fn evaluate(&mut self) -> bool;
}

impl<O: Operand + ?Sized> Operand for &mut O {
    type Value = O::Value;

    fn resolve(&mut self) -> &Self::Value {
        (**self).resolve()
    }

    fn is_reached(&self) -> bool {
        (**self).is_reached()
    }
}

impl<E: Expression + ?Sized> Expression for &mut E {
    fn evaluate(&mut self) -> bool {
        (**self).evaluate()
    }
}
