use crate::config::{ColorChoice, RunConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 只运行名称路径匹配该正则的用例
    #[arg(value_name = "FILTER")]
    pub filter: Option<String>,

    /// 显示每个用例的执行过程和结果明细
    #[arg(short, long)]
    pub verbose: bool,

    /// 终端着色
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// 只列出用例，不执行
    #[arg(long)]
    pub list: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            filter: cli.filter,
            verbose: cli.verbose,
            color: cli.color,
            list: cli.list,
        }
    }
}
