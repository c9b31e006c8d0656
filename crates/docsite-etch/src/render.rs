//! Page rendering
//!
//! Rendering is a capability handed to the pipeline: anything implementing
//! [`PageRenderer`] can turn a [`PageContext`] into page text. The default
//! implementation is [`HandlebarsRenderer`], with built-in templates for both
//! flavors and support for a user template folder.

use crate::diagnostics::{EtchError, EtchResult};
use crate::signature::Flavor;
use crate::view::PageContext;
use handlebars::{handlebars_helper, no_escape, Handlebars};
use std::fs;
use std::path::Path;

const MARKDOWN_INDEX: &str = include_str!("templates/markdown/index.hbs");
const MARKDOWN_PARAMS: &str = include_str!("templates/markdown/params.hbs");
const MARKDOWN_MEMBERS: &str = include_str!("templates/markdown/members.hbs");
const HTML_INDEX: &str = include_str!("templates/html/index.hbs");
const HTML_PARAMS: &str = include_str!("templates/html/params.hbs");
const HTML_MEMBERS: &str = include_str!("templates/html/members.hbs");

/// Turns page data into page text
pub trait PageRenderer {
    /// Render one page
    fn render(&self, page: &PageContext) -> EtchResult<String>;
}

/// Convert Markdown to HTML
pub fn markdown_to_html(md: &str) -> String {
    comrak::markdown_to_html(md, &comrak::Options::default())
}

handlebars_helper!(markdown_helper: |md: str| markdown_to_html(md));

/// Handlebars-backed renderer.
///
/// A template set is an `index` template plus `params` and `members`
/// partials. Markdown output is not HTML-escaped; HTML output is, and gets a
/// `markdown` helper for description fields.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
    flavor: Flavor,
}

impl HandlebarsRenderer {
    /// Built-in Markdown templates
    pub fn markdown() -> EtchResult<Self> {
        Self::with_templates(
            Flavor::Markdown,
            MARKDOWN_INDEX,
            MARKDOWN_PARAMS,
            MARKDOWN_MEMBERS,
        )
    }

    /// Built-in HTML templates
    pub fn html() -> EtchResult<Self> {
        Self::with_templates(Flavor::Html, HTML_INDEX, HTML_PARAMS, HTML_MEMBERS)
    }

    /// Built-in templates of a flavor
    pub fn for_flavor(flavor: Flavor) -> EtchResult<Self> {
        match flavor {
            Flavor::Markdown => Self::markdown(),
            Flavor::Html => Self::html(),
        }
    }

    /// Load `index.hbs`, `params.hbs` and `members.hbs` from a folder
    pub fn from_dir(dir: &Path, flavor: Flavor) -> EtchResult<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            if !path.exists() {
                return Err(EtchError::FileNotFound(path));
            }
            Ok(fs::read_to_string(path)?)
        };

        Self::with_templates(
            flavor,
            &read("index.hbs")?,
            &read("params.hbs")?,
            &read("members.hbs")?,
        )
    }

    /// Register a template set
    pub fn with_templates(
        flavor: Flavor,
        index: &str,
        params: &str,
        members: &str,
    ) -> EtchResult<Self> {
        let mut registry = Handlebars::new();
        if flavor == Flavor::Markdown {
            registry.register_escape_fn(no_escape);
        }
        registry.register_helper("markdown", Box::new(markdown_helper));
        registry.register_template_string("index", index)?;
        registry.register_partial("params", params)?;
        registry.register_partial("members", members)?;

        Ok(Self { registry, flavor })
    }

    /// The flavor this renderer produces
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }
}

impl PageRenderer for HandlebarsRenderer {
    fn render(&self, page: &PageContext) -> EtchResult<String> {
        Ok(self.registry.render("index", page)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::mock_class_section;
    use std::fs;

    fn page(flavor: Flavor) -> PageContext {
        PageContext::new("Context", "0.14", &[mock_class_section("Context")], flavor)
    }

    #[test]
    fn test_markdown_page() {
        let renderer = HandlebarsRenderer::markdown().unwrap();
        let md = renderer.render(&page(Flavor::Markdown)).unwrap();

        assert!(md.starts_with("title: Context\n---\n"));
        assert!(md.contains("API 0.14"));
        assert!(md.contains("## `new Context(broker: ServiceBroker)`"));
        assert!(md.contains("Context class."));
        assert!(md.contains("| `broker` | `ServiceBroker` | - | Broker instance |"));
        assert!(md.contains("#### `call(actionName: String, opts): Promise`"));
        assert!(md.contains("| `opts` | `Object` | `{}` | Call options |"));
        assert!(md.contains("| `Promise` |"));
    }

    #[test]
    fn test_html_page() {
        let renderer = HandlebarsRenderer::html().unwrap();
        let html = renderer.render(&page(Flavor::Html)).unwrap();

        assert!(html.contains("<title>Context API documentation</title>"));
        assert!(html.contains("<section id=\"context\" class=\"symbol kind-class\">"));
        assert!(html.contains("<h2><code>new Context(broker: ServiceBroker)</code></h2>"));
        assert!(html.contains("<p>Context class.</p>"));
        assert!(html.contains("<div id=\"context-call\" class=\"member kind-function\">"));
        assert!(html.contains("<li><a href=\"#context\">Context(broker)</a></li>"));
    }

    #[test]
    fn test_html_escapes_signatures() {
        let renderer =
            HandlebarsRenderer::with_templates(Flavor::Html, "{{title}}", "", "").unwrap();
        let mut page = page(Flavor::Html);
        page.title = "Array<Context>".to_string();
        assert_eq!(renderer.render(&page).unwrap(), "Array&lt;Context&gt;");
    }

    #[test]
    fn test_markdown_does_not_escape() {
        let renderer =
            HandlebarsRenderer::with_templates(Flavor::Markdown, "{{title}}", "", "").unwrap();
        let mut page = page(Flavor::Markdown);
        page.title = "Array<Context>".to_string();
        assert_eq!(renderer.render(&page).unwrap(), "Array<Context>");
    }

    #[test]
    fn test_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("index.hbs"),
            "{{#each sections}}{{signature}}{{> members}}{{/each}}",
        )
        .unwrap();
        fs::write(dir.path().join("params.hbs"), "").unwrap();
        fs::write(
            dir.path().join("members.hbs"),
            "{{#each members}};{{short_signature}}{{/each}}",
        )
        .unwrap();

        let renderer = HandlebarsRenderer::from_dir(dir.path(), Flavor::Markdown).unwrap();
        assert_eq!(renderer.flavor(), Flavor::Markdown);
        assert_eq!(
            renderer.render(&page(Flavor::Markdown)).unwrap(),
            "new Context(broker: ServiceBroker);call(actionName, opts = {})"
        );
    }

    #[test]
    fn test_from_dir_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = HandlebarsRenderer::from_dir(dir.path(), Flavor::Html)
            .err()
            .unwrap();
        assert!(matches!(err, EtchError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_template() {
        let err = HandlebarsRenderer::with_templates(Flavor::Html, "{{#each}}", "", "")
            .err()
            .unwrap();
        assert!(matches!(err, EtchError::Template(_)));
    }

    #[test]
    fn test_markdown_to_html() {
        assert_eq!(
            markdown_to_html("Use `ctx.call`"),
            "<p>Use <code>ctx.call</code></p>\n"
        );
    }
}
