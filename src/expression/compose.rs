use crate::expression::clause::Clause;
use crate::expression::composite::{Equality, Logical, Negation, Relation};
use crate::expression::types::{CompareOp, Expression, LogicalOp, Operand};
use std::fmt;

/// 把一个值提升为表达式节点
///
/// 基本类型和字符串包装为 [`Clause`]；已经是节点的值原样返回，
/// 因此重复提升不会产生嵌套包装。其他类型请使用 [`Clause::new`]。
pub trait Lift {
    type Node: Operand;

    fn lift(self) -> Self::Node;
}

/// 数值字面量放在左侧时需要写明类型（`lift(17_i32)`），右侧的字面量可以省略。
pub fn lift<V: Lift>(value: V) -> V::Node {
    value.lift()
}

macro_rules! lift_as_clause {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Lift for $ty {
                type Node = Clause<$ty>;

                fn lift(self) -> Self::Node {
                    Clause::new(self)
                }
            }
        )*
    };
}

lift_as_clause!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

impl<'a> Lift for &'a str {
    type Node = Clause<&'a str>;

    fn lift(self) -> Self::Node {
        Clause::new(self)
    }
}

impl<T: fmt::Display> Lift for Clause<T> {
    type Node = Self;

    fn lift(self) -> Self {
        self
    }
}

impl<'a, O: Operand + ?Sized> Lift for &'a mut O {
    type Node = Self;

    fn lift(self) -> Self {
        self
    }
}

impl<L: Expression, R: Expression> Lift for Logical<L, R> {
    type Node = Self;

    fn lift(self) -> Self {
        self
    }
}

impl<L, R> Lift for Equality<L, R>
where
    L: Operand,
    R: Operand,
    L::Value: PartialEq<R::Value>,
{
    type Node = Self;

    fn lift(self) -> Self {
        self
    }
}

impl<L, R> Lift for Relation<L, R>
where
    L: Operand,
    R: Operand,
    L::Value: PartialOrd<R::Value>,
{
    type Node = Self;

    fn lift(self) -> Self {
        self
    }
}

impl<E: Expression> Lift for Negation<E> {
    type Node = Self;

    fn lift(self) -> Self {
        self
    }
}

/// 表达式组合子
///
/// 左侧必须已经是节点，右侧可以是任何可提升的值：
/// `lift(a).and(b)`、`lift(17_i32).equals(17)`。
pub trait Compose: Operand + Sized {
    fn and<R>(self, rhs: R) -> Logical<Self, R::Node>
    where
        Self: Expression,
        R: Lift,
        R::Node: Expression,
    {
        Logical::new(self, LogicalOp::And, rhs.lift())
    }

    fn or<R>(self, rhs: R) -> Logical<Self, R::Node>
    where
        Self: Expression,
        R: Lift,
        R::Node: Expression,
    {
        Logical::new(self, LogicalOp::Or, rhs.lift())
    }

    fn not(self) -> Negation<Self>
    where
        Self: Expression,
    {
        Negation::new(self)
    }

    fn equals<R>(self, rhs: R) -> Equality<Self, R::Node>
    where
        R: Lift,
        Self::Value: PartialEq<<R::Node as Operand>::Value>,
    {
        Equality::new(self, CompareOp::Equal, rhs.lift())
    }

    fn not_equals<R>(self, rhs: R) -> Equality<Self, R::Node>
    where
        R: Lift,
        Self::Value: PartialEq<<R::Node as Operand>::Value>,
    {
        Equality::new(self, CompareOp::NotEqual, rhs.lift())
    }

    fn less<R>(self, rhs: R) -> Relation<Self, R::Node>
    where
        R: Lift,
        Self::Value: PartialOrd<<R::Node as Operand>::Value>,
    {
        Relation::new(self, CompareOp::Less, rhs.lift())
    }

    fn less_or_equal<R>(self, rhs: R) -> Relation<Self, R::Node>
    where
        R: Lift,
        Self::Value: PartialOrd<<R::Node as Operand>::Value>,
    {
        Relation::new(self, CompareOp::LessOrEqual, rhs.lift())
    }

    fn greater<R>(self, rhs: R) -> Relation<Self, R::Node>
    where
        R: Lift,
        Self::Value: PartialOrd<<R::Node as Operand>::Value>,
    {
        Relation::new(self, CompareOp::Greater, rhs.lift())
    }

    fn greater_or_equal<R>(self, rhs: R) -> Relation<Self, R::Node>
    where
        R: Lift,
        Self::Value: PartialOrd<<R::Node as Operand>::Value>,
    {
        Relation::new(self, CompareOp::GreaterOrEqual, rhs.lift())
    }
}

impl<T: Operand> Compose for T {}
