/// 表达式模块 - 把断言中的布尔表达式拆解为可延迟求值、可渲染的节点树
mod clause;
mod compose;
mod composite;
mod types;

pub use clause::Clause;
pub use compose::{Compose, Lift, lift};
pub use composite::{Equality, Logical, Negation, Relation};
pub use types::{CompareOp, Expression, LogicalOp, Observation, Operand, Truthy, UNKNOWN};
