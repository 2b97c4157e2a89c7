use crate::app::error::RunError;
use crate::app::hooks::{Method, MethodRole, Tag};
use crate::time::DurationUnit;
use derivative::*;

/// A `Test` method with its metadata pulled out of the tag list.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub(crate) struct TestCase<S> {
    pub method: Method<S>,
    pub description: Option<String>,
    pub timeout: Option<DurationUnit>,
}

/// A suite's methods partitioned by role, each in declaration order.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Default(bound = ""))]
pub(crate) struct Classified<S> {
    pub one_time_setup: Vec<Method<S>>,
    pub per_test_setup: Vec<Method<S>>,
    pub tests: Vec<TestCase<S>>,
    pub per_test_teardown: Vec<Method<S>>,
    pub one_time_teardown: Vec<Method<S>>,
}

pub(crate) fn classify<S>(
    suite: &'static str,
    methods: Vec<Method<S>>,
) -> Result<Classified<S>, RunError> {
    let mut classified = Classified::default();
    for method in methods {
        let mut role = None;
        let mut timeout = None;
        let mut description = None;
        let name = method.name();
        let reject = |reason: String| RunError::Configuration {
            suite,
            method: name,
            reason,
        };
        for tag in method.tags() {
            match tag {
                Tag::Timeout(budget) => {
                    if timeout.replace(*budget).is_some() {
                        return Err(reject("timeout declared more than once".to_owned()));
                    }
                }
                Tag::Description(text) => {
                    if description.replace(text.clone()).is_some() {
                        return Err(reject("description declared more than once".to_owned()));
                    }
                }
                _ => {
                    if let Some(found) = tag.role() {
                        if let Some(previous) = role.replace(found) {
                            return Err(reject(format!(
                                "conflicting roles: {} and {}",
                                previous, found
                            )));
                        }
                    }
                }
            }
        }
        let role = match role {
            Some(role) => role,
            None => {
                trace!("Skipping untagged method '{}::{}'", suite, name);
                continue;
            }
        };
        if role != MethodRole::Test && (timeout.is_some() || description.is_some()) {
            return Err(reject(format!(
                "timeout and description apply to tests only, not to {}",
                role
            )));
        }
        match role {
            MethodRole::OneTimeSetup => classified.one_time_setup.push(method),
            MethodRole::PerTestSetup => classified.per_test_setup.push(method),
            MethodRole::Test => classified.tests.push(TestCase {
                method,
                description,
                timeout,
            }),
            MethodRole::PerTestTeardown => classified.per_test_teardown.push(method),
            MethodRole::OneTimeTeardown => classified.one_time_teardown.push(method),
        }
    }
    debug!(
        "Suite '{}' declares {} tests, {}/{} one-time hooks, {}/{} per-test hooks",
        suite,
        classified.tests.len(),
        classified.one_time_setup.len(),
        classified.one_time_teardown.len(),
        classified.per_test_setup.len(),
        classified.per_test_teardown.len()
    );
    Ok(classified)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::app::assert::TestResult;
    use crate::app::context::TestContext;

    struct Dummy;

    fn noop(_: &Dummy, _: &TestContext) -> TestResult {
        Ok(())
    }

    fn names<S>(methods: &[Method<S>]) -> Vec<&'static str> {
        methods.iter().map(Method::name).collect()
    }

    #[test]
    fn test_partition_keeps_declaration_order() {
        let methods = vec![
            Method::test("second_declared_first", noop),
            Method::after_all("close", noop),
            Method::before_each("reset", noop),
            Method::test("first_declared_second", noop).description("adds numbers"),
            Method::before_all("open", noop),
            Method::after_each("clean", noop),
            Method::new("helper", noop),
            Method::test("third", noop).timeout(DurationUnit::millis(50)),
        ];
        let classified = classify("Dummy", methods).unwrap();

        let tests: Vec<_> = classified.tests.iter().map(|c| c.method.name()).collect();
        assert_eq!(
            tests,
            vec!["second_declared_first", "first_declared_second", "third"]
        );
        assert_eq!(classified.tests[1].description.as_deref(), Some("adds numbers"));
        assert_eq!(classified.tests[2].timeout, Some(DurationUnit::millis(50)));
        assert_eq!(names(&classified.one_time_setup), vec!["open"]);
        assert_eq!(names(&classified.per_test_setup), vec!["reset"]);
        assert_eq!(names(&classified.per_test_teardown), vec!["clean"]);
        assert_eq!(names(&classified.one_time_teardown), vec!["close"]);
    }

    #[test]
    fn test_conflicting_roles_are_rejected() {
        let methods = vec![Method::test("both", noop).tag(Tag::PerTestSetup)];
        let error = classify("Dummy", methods).unwrap_err();

        assert_eq!(
            error,
            RunError::Configuration {
                suite: "Dummy",
                method: "both",
                reason: "conflicting roles: test and per-test setup".to_owned(),
            }
        );
    }

    #[test]
    fn test_timeout_on_hook_is_rejected() {
        let methods = vec![Method::before_all("open", noop).timeout(DurationUnit::seconds(1))];

        assert!(classify("Dummy", methods).is_err());
    }

    #[test]
    fn test_repeated_timeout_is_rejected() {
        let methods = vec![Method::test("slow", noop)
            .timeout(DurationUnit::seconds(1))
            .timeout(DurationUnit::seconds(2))];

        assert!(classify("Dummy", methods).is_err());
    }
}
