use crate::assertion::Observer;
use crate::framework::case::{Case, NamePath};

/// 测试套件：在同一个名称前缀下注册一组用例
pub struct Suite {
    path: NamePath,
    cases: Vec<Case>,
}

impl Suite {
    pub fn new(name: impl Into<NamePath>) -> Self {
        Self {
            path: name.into(),
            cases: Vec::new(),
        }
    }

    pub fn path(&self) -> &NamePath {
        &self.path
    }

    /// 注册一个用例
    pub fn test<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn(&mut Observer<'_>) + Send + Sync + 'static,
    {
        let path = self.path.child(name);
        self.cases.push(Case::new(path, body));
        self
    }

    /// 注册一个可返回错误的用例
    pub fn try_test<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn(&mut Observer<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let path = self.path.child(name);
        self.cases.push(Case::fallible(path, body));
        self
    }

    /// 注册嵌套套件，其用例名称以当前套件为前缀
    pub fn suite(&mut self, name: impl Into<String>, build: impl FnOnce(&mut Suite)) -> &mut Self {
        let mut nested = Suite::new(self.path.child(name));
        build(&mut nested);
        self.cases.append(&mut nested.cases);
        self
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// 用例注册表：按注册顺序保存全部用例，显式传给执行器
#[derive(Default)]
pub struct Registry {
    cases: Vec<Case>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 构建并注册一个套件
    pub fn suite(&mut self, name: impl Into<NamePath>, build: impl FnOnce(&mut Suite)) -> &mut Self {
        let mut suite = Suite::new(name);
        build(&mut suite);
        self.add_suite(suite)
    }

    pub fn add_suite(&mut self, suite: Suite) -> &mut Self {
        self.cases.extend(suite.cases);
        self
    }

    /// 直接注册单个用例
    pub fn register(&mut self, case: Case) -> &mut Self {
        self.cases.push(case);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Case> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// 按名称路径查找用例
    pub fn find(&self, name_path: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.name().to_string() == name_path)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Case;
    type IntoIter = std::slice::Iter<'a, Case>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_and_paths() {
        let mut registry = Registry::new();
        registry.suite("by_type", |suite| {
            for expectation in [true, false] {
                suite.test(expectation.to_string(), move |o| {
                    o.expect(expectation);
                });
            }
            suite.suite("nested", |nested| {
                nested.try_test("fallible", |_| Ok(()));
            });
        });

        let names: Vec<String> = registry.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(
            names,
            vec!["by_type/true", "by_type/false", "by_type/nested/fallible"]
        );
        assert_eq!(registry.len(), 3);
        assert!(registry.find("by_type/false").is_some());
        assert!(registry.find("by_type/missing").is_none());
    }

    #[test]
    fn test_register_single_case() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        registry.register(Case::new("standalone", |o| {
            o.expect(true);
        }));
        assert_eq!((&registry).into_iter().count(), 1);
    }
}
