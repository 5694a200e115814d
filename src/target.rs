use serde::Serialize;

use crate::{error::InvalidArgument, template::TargetTemplate};

/// A phony target to append to a Makefile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub name: String,
    /// Written verbatim as the single recipe line, after a tab.
    pub content: Option<String>,
    pub dependencies: Vec<String>,
}

/// Values substituted into a [`TargetTemplate`].
#[derive(Debug, Clone, Serialize)]
pub struct TargetData<'a> {
    pub name: &'a str,
    /// Space-joined dependency names.
    pub dependencies: String,
    pub content: &'a str,
}

impl TargetSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Checks that the name and every dependency can be used as a rule word.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if self.name.is_empty() {
            return Err(InvalidArgument::EmptyName);
        }
        if contains_space(&self.name) {
            return Err(InvalidArgument::SpaceInName);
        }
        for dep in &self.dependencies {
            if dep.is_empty() {
                return Err(InvalidArgument::EmptyDependency);
            }
            if contains_space(dep) {
                return Err(InvalidArgument::SpaceInDependency);
            }
        }
        Ok(())
    }

    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    pub fn template(&self) -> TargetTemplate {
        TargetTemplate::select(self.has_content(), self.has_dependencies())
    }

    pub fn data(&self) -> TargetData<'_> {
        TargetData {
            name: &self.name,
            dependencies: self.dependencies.join(" "),
            content: self.content.as_deref().unwrap_or_default(),
        }
    }
}

fn contains_space(s: &str) -> bool {
    s.chars().any(char::is_whitespace)
}
