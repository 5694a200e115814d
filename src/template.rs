use std::io::Write;

use handlebars::Handlebars;

use crate::target::TargetData;

/// Starter content written by `generate`.
pub const BOILERPLATE: &str = r#".PHONY: help
## help: shows this help message
help:
	@ echo "Usage: make [target]\n"
	@ sed -n 's/^##//p' ${MAKEFILE_LIST} | column -t -s ':' |  sed -e 's/^/ /'

.PHONY: test
## test: run unit tests
test:
	@ cargo test --all-targets

.PHONY: coverage
## coverage: run unit tests and generate coverage report in html format
coverage:
	@ cargo llvm-cov --html
"#;

const PLAIN: &str = "
.PHONY: {{name}}
## {{name}}: explain what {{name}} does
{{name}}:
";

const WITH_DEPENDENCIES: &str = "
.PHONY: {{name}}
## {{name}}: explain what {{name}} does
{{name}}: {{dependencies}}
";

const WITH_CONTENT: &str = "
.PHONY: {{name}}
## {{name}}: explain what {{name}} does
{{name}}:
\t{{content}}
";

const WITH_CONTENT_AND_DEPENDENCIES: &str = "
.PHONY: {{name}}
## {{name}}: explain what {{name}} does
{{name}}: {{dependencies}}
\t{{content}}
";

/// The four shapes of an appended target block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetTemplate {
    Plain,
    WithDependencies,
    WithContent,
    WithContentAndDependencies,
}

impl TargetTemplate {
    pub fn select(has_content: bool, has_dependencies: bool) -> Self {
        match (has_content, has_dependencies) {
            (false, false) => TargetTemplate::Plain,
            (false, true) => TargetTemplate::WithDependencies,
            (true, false) => TargetTemplate::WithContent,
            (true, true) => TargetTemplate::WithContentAndDependencies,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TargetTemplate::Plain => "target",
            TargetTemplate::WithDependencies => "target_with_dependencies",
            TargetTemplate::WithContent => "target_with_content",
            TargetTemplate::WithContentAndDependencies => "target_with_content_and_dependencies",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            TargetTemplate::Plain => PLAIN,
            TargetTemplate::WithDependencies => WITH_DEPENDENCIES,
            TargetTemplate::WithContent => WITH_CONTENT,
            TargetTemplate::WithContentAndDependencies => WITH_CONTENT_AND_DEPENDENCIES,
        }
    }
}

/// Two-stage template rendering: parse a named template, then execute it
/// into a writer.
pub trait TemplateRenderer {
    type Compiled;

    fn parse(&self, name: &str, text: &str) -> anyhow::Result<Self::Compiled>;

    fn execute(
        &self,
        template: &Self::Compiled,
        data: &TargetData<'_>,
        out: &mut dyn Write,
    ) -> anyhow::Result<()>;
}

impl<T: TemplateRenderer + ?Sized> TemplateRenderer for &T {
    type Compiled = T::Compiled;

    fn parse(&self, name: &str, text: &str) -> anyhow::Result<Self::Compiled> {
        (**self).parse(name, text)
    }

    fn execute(
        &self,
        template: &Self::Compiled,
        data: &TargetData<'_>,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        (**self).execute(template, data, out)
    }
}

/// [`TemplateRenderer`] backed by `handlebars`, with escaping disabled and
/// strict mode on.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandlebarsRenderer;

/// A single parsed template and the registry that owns it.
pub struct CompiledTemplate {
    name: String,
    registry: Handlebars<'static>,
}

impl TemplateRenderer for HandlebarsRenderer {
    type Compiled = CompiledTemplate;

    fn parse(&self, name: &str, text: &str) -> anyhow::Result<CompiledTemplate> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        registry.register_template_string(name, text)?;
        Ok(CompiledTemplate {
            name: name.to_string(),
            registry,
        })
    }

    fn execute(
        &self,
        template: &CompiledTemplate,
        data: &TargetData<'_>,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        template
            .registry
            .render_to_write(&template.name, data, out)?;
        Ok(())
    }
}
