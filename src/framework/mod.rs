/// 用例注册模块 - 名称路径、用例、套件与注册表
mod case;
mod registry;

pub use case::{Body, Case, NamePath, SEPARATOR};
pub use registry::{Registry, Suite};
