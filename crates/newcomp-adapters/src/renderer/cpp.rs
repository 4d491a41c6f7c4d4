//! Header/source renderer for the embedded C++ component layout.

use newcomp_core::{
    application::{ApplicationError, ports::ComponentRenderer},
    domain::{ComponentSpec, RenderContext, RenderedComponent},
    error::ScaffoldResult,
};
use tracing::{debug, instrument};

use super::templates as t;

/// Doxygen block written at the top of both generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub author: String,
    pub version: String,
    pub date: String,
}

impl Banner {
    /// Banner stamped with today's local date.
    pub fn dated_today(author: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            version: version.into(),
            date: chrono::Local::now().format("%d.%m.%Y").to_string(),
        }
    }
}

/// Renders the fixed component templates.
///
/// Two axes pick the fragments: whether the category is the periodic one
/// and whether a serial callback was requested.
#[derive(Debug, Clone, Default)]
pub struct CppRenderer {
    banner: Option<Banner>,
}

impl CppRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_banner(mut self, banner: Banner) -> Self {
        self.banner = Some(banner);
        self
    }

    fn header_template(spec: &ComponentSpec) -> String {
        let periodic = spec.is_periodic();
        let mut template = String::from(t::HEADER_OPEN);
        template.push_str(if periodic {
            t::PERIODIC_INCLUDES
        } else {
            t::GENERIC_INCLUDES
        });
        template.push_str(t::HEADER_CLASS_OPEN);
        template.push_str(if periodic {
            t::PERIODIC_CLASS_LINE
        } else {
            t::CLASS_LINE
        });
        template.push_str(t::HEADER_PUBLIC);
        if spec.wants_callback() {
            template.push_str(t::CALLBACK_DECLARATION);
        }
        template.push_str(t::HEADER_PRIVATE);
        if periodic {
            template.push_str(t::PERIODIC_PRIVATE);
        }
        template.push_str(t::HEADER_CLOSE);
        template
    }

    fn source_template(spec: &ComponentSpec) -> String {
        let periodic = spec.is_periodic();
        let mut template = String::from(t::SOURCE_OPEN);
        if periodic {
            template.push_str(t::PERIODIC_INITIALIZERS);
        }
        template.push_str(t::SOURCE_BODY);
        if periodic {
            template.push_str(t::RUN_DEFINITION);
        }
        if spec.wants_callback() {
            template.push_str(t::CALLBACK_DEFINITION);
        }
        template.push_str(t::SOURCE_CLOSE);
        template
    }

    fn banner_for(&self, ctx: &RenderContext, file_name: String) -> ScaffoldResult<String> {
        match &self.banner {
            Some(banner) => fill(
                &ctx.clone()
                    .with_variable("FILE_NAME", file_name)
                    .with_variable("AUTHOR", banner.author.as_str())
                    .with_variable("VERSION", banner.version.as_str())
                    .with_variable("DATE", banner.date.as_str()),
                t::BANNER,
            ),
            None => Ok(String::new()),
        }
    }
}

/// Render `template`, failing on any placeholder the context cannot fill.
/// Only the template is checked; values may contain braces.
fn fill(ctx: &RenderContext, template: &str) -> ScaffoldResult<String> {
    if let Some(name) = ctx.first_unresolved(template) {
        return Err(ApplicationError::RenderingFailed {
            reason: format!("unresolved placeholder '{{{{{name}}}}}'"),
        }
        .into());
    }
    Ok(ctx.render(template))
}

impl ComponentRenderer for CppRenderer {
    #[instrument(skip_all, fields(category = %spec.category(), component = %spec.name()))]
    fn render(&self, spec: &ComponentSpec) -> ScaffoldResult<RenderedComponent> {
        let parameter = if spec.is_periodic() {
            t::PERIODIC_PARAMETER
        } else {
            t::GENERIC_PARAMETER
        };
        let ctx = RenderContext::for_component(spec).with_variable("PARAMETER", parameter);

        let mut header = self.banner_for(&ctx, format!("{}.hpp", spec.name()))?;
        header.push_str(&fill(&ctx, &Self::header_template(spec))?);

        let mut source = self.banner_for(&ctx, format!("{}.cpp", spec.name()))?;
        source.push_str(&fill(&ctx, &Self::source_template(spec))?);

        debug!(
            header_lines = header.lines().count(),
            source_lines = source.lines().count(),
            "component rendered"
        );
        Ok(RenderedComponent { header, source })
    }
}
