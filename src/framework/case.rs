use crate::assertion::Observer;
use std::fmt;

/// 用例体：接收断言观察者，返回 `Err` 表示用例异常终止
pub type Body = Box<dyn Fn(&mut Observer<'_>) -> anyhow::Result<()> + Send + Sync>;

/// 名称路径分隔符
pub const SEPARATOR: char = '/';

/// 层级化的用例名称，例如 `by_type/true`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NamePath {
    segments: Vec<String>,
}

impl NamePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一级名称，空段会被忽略
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.extend(segment.into().as_str());
        path
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn extend(&mut self, raw: &str) {
        self.segments.extend(
            raw.split(SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
    }
}

impl From<&str> for NamePath {
    fn from(raw: &str) -> Self {
        let mut path = Self::new();
        path.extend(raw);
        path
    }
}

impl From<String> for NamePath {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl fmt::Display for NamePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// 一个已注册的测试用例
pub struct Case {
    name: NamePath,
    body: Body,
}

impl Case {
    /// 不会返回错误的用例体
    pub fn new<F>(name: impl Into<NamePath>, body: F) -> Self
    where
        F: Fn(&mut Observer<'_>) + Send + Sync + 'static,
    {
        Self::fallible(name, move |observer: &mut Observer<'_>| {
            body(observer);
            Ok(())
        })
    }

    /// 可以通过 `?` 提前终止的用例体
    pub fn fallible<F>(name: impl Into<NamePath>, body: F) -> Self
    where
        F: Fn(&mut Observer<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &NamePath {
        &self.name
    }

    /// 运行用例体（不捕获 panic，由执行器负责隔离）
    pub fn run(&self, observer: &mut Observer<'_>) -> anyhow::Result<()> {
        (self.body)(observer)
    }
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case").field("name", &self.name).finish_non_exhaustive()
    }
}
