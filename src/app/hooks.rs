//! Declarative tagging of suite methods.

use crate::app::assert::TestResult;
use crate::app::context::TestContext;
use crate::time::DurationUnit;
use derivative::*;
use std::fmt;

pub type Body<S> = fn(&S, &TestContext) -> TestResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodRole {
    OneTimeSetup,
    PerTestSetup,
    Test,
    PerTestTeardown,
    OneTimeTeardown,
}

impl fmt::Display for MethodRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            MethodRole::OneTimeSetup => "one-time setup",
            MethodRole::PerTestSetup => "per-test setup",
            MethodRole::Test => "test",
            MethodRole::PerTestTeardown => "per-test teardown",
            MethodRole::OneTimeTeardown => "one-time teardown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    OneTimeSetup,
    PerTestSetup,
    Test,
    PerTestTeardown,
    OneTimeTeardown,
    Timeout(DurationUnit),
    Description(String),
}

impl Tag {
    pub fn role(&self) -> Option<MethodRole> {
        match self {
            Tag::OneTimeSetup => Some(MethodRole::OneTimeSetup),
            Tag::PerTestSetup => Some(MethodRole::PerTestSetup),
            Tag::Test => Some(MethodRole::Test),
            Tag::PerTestTeardown => Some(MethodRole::PerTestTeardown),
            Tag::OneTimeTeardown => Some(MethodRole::OneTimeTeardown),
            Tag::Timeout(_) | Tag::Description(_) => None,
        }
    }
}

/// A named, tagged entry of a suite.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""))]
pub struct Method<S> {
    name: &'static str,
    tags: Vec<Tag>,
    #[derivative(Debug = "ignore")]
    body: Body<S>,
}

impl<S> Method<S> {
    pub fn new(name: &'static str, body: Body<S>) -> Self {
        Self {
            name,
            tags: Vec::new(),
            body,
        }
    }

    pub fn test(name: &'static str, body: Body<S>) -> Self {
        Self::new(name, body).tag(Tag::Test)
    }

    pub fn before_all(name: &'static str, body: Body<S>) -> Self {
        Self::new(name, body).tag(Tag::OneTimeSetup)
    }

    pub fn before_each(name: &'static str, body: Body<S>) -> Self {
        Self::new(name, body).tag(Tag::PerTestSetup)
    }

    pub fn after_each(name: &'static str, body: Body<S>) -> Self {
        Self::new(name, body).tag(Tag::PerTestTeardown)
    }

    pub fn after_all(name: &'static str, body: Body<S>) -> Self {
        Self::new(name, body).tag(Tag::OneTimeTeardown)
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn timeout(self, budget: DurationUnit) -> Self {
        self.tag(Tag::Timeout(budget))
    }

    pub fn description(self, text: impl Into<String>) -> Self {
        self.tag(Tag::Description(text.into()))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn body(&self) -> Body<S> {
        self.body
    }
}
