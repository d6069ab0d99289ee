use crate::Result;
use crate::runner::CaseExecutor;

/// 终端着色策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// 由终端环境决定
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// 设置全局着色开关
    pub fn apply(&self) {
        match self {
            ColorChoice::Auto => colored::control::unset_override(),
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

/// 一次运行的配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// 名称路径过滤正则
    pub filter: Option<String>,

    /// 显示每个用例的开始、通过和明细表
    pub verbose: bool,

    pub color: ColorChoice,

    /// 只列出选中的用例，不执行
    pub list: bool,
}

impl RunConfig {
    /// 按配置构建执行器
    pub fn executor(&self) -> Result<CaseExecutor> {
        match &self.filter {
            Some(pattern) => CaseExecutor::with_filter(pattern),
            None => Ok(CaseExecutor::new()),
        }
    }
}
