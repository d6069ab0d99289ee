use clean_test::{CleanTestError, Result};
use std::io;

#[test]
fn test_invalid_filter() {
    let err: CleanTestError = regex::Regex::new("(").unwrap_err().into();
    assert!(err.to_string().starts_with("无效的用例过滤表达式"));
}

#[test]
fn test_io_error() {
    let err: CleanTestError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
    assert_eq!(err.to_string(), "IO 错误: pipe closed");
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<()> {
        Err(io::Error::other("disk full").into())
    }

    match returns_error() {
        Err(CleanTestError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
        _ => panic!("Expected Io"),
    }
}
