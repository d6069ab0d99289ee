use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanTestError {
    #[error("无效的用例过滤表达式: {0}")]
    InvalidFilter(#[from] regex::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for clean-test crate
pub type Result<T> = std::result::Result<T, CleanTestError>;
