//! Template view model
//!
//! Templates never see [`Section`]s directly. Everything a page shows,
//! signatures included, is computed here and handed to the renderer as plain
//! serializable data.

use crate::js_doc::{find_tag, Description, Tag};
use crate::params::Parameter;
use crate::section::Section;
use crate::signature::{short_signature, signature, Flavor};
use crate::site::slug::{slug, unique_slug};
use serde::Serialize;

/// Data for one rendered page
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// Page title (the documented class)
    pub title: String,
    /// `major.minor` version the page documents
    pub api_version: String,
    /// Top-level sections in source order
    pub sections: Vec<SectionView>,
}

impl PageContext {
    /// Build the page data for a source file's sections
    pub fn new(
        title: impl Into<String>,
        api_version: impl Into<String>,
        sections: &[Section],
        flavor: Flavor,
    ) -> Self {
        let mut sections: Vec<SectionView> = sections
            .iter()
            .map(|s| SectionView::new(s, flavor, true))
            .collect();

        // Overloads and re-declared members would otherwise share an anchor
        let mut seen: Vec<String> = Vec::new();
        for view in sections.iter_mut() {
            for anchor in std::iter::once(&mut view.anchor)
                .chain(view.members.iter_mut().map(|m| &mut m.anchor))
            {
                let unique = unique_slug(anchor.as_str(), &seen);
                seen.push(unique.clone());
                *anchor = unique;
            }
        }

        Self {
            title: title.into(),
            api_version: api_version.into(),
            sections,
        }
    }
}

/// Display data for one section
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    /// Identifier
    pub name: String,
    /// Extractor kind name
    pub kind: String,
    /// HTML anchor id
    pub anchor: String,
    /// Full signature
    pub signature: String,
    /// Compact signature
    pub short_signature: String,
    /// First text of the description
    pub summary: Option<String>,
    /// Description as Markdown
    pub description: String,
    /// Parameter rows
    pub params: Vec<ParamView>,
    /// Whether any parameter is backed by a `@param` tag
    pub has_params: bool,
    /// First documented return value
    pub returns: Option<ReturnView>,
    /// `@example` sources
    pub examples: Vec<String>,
    /// Static then instance members
    pub members: Vec<SectionView>,
    /// Whether this is a static member
    pub is_static: bool,
}

impl SectionView {
    /// Build the view of a section. Members are only expanded one level deep.
    pub fn new(section: &Section, flavor: Flavor, with_members: bool) -> Self {
        let anchor = match section.memberof {
            Some(ref owner) => slug(&format!("{}-{}", owner, section.name)),
            None => slug(&section.name),
        };

        let members = if with_members {
            section
                .members
                .static_members
                .iter()
                .chain(section.members.instance.iter())
                .map(|m| SectionView::new(m, flavor, false))
                .collect()
        } else {
            vec![]
        };

        Self {
            name: section.name.clone(),
            kind: section.kind_name().to_string(),
            anchor,
            signature: signature(section, flavor),
            short_signature: short_signature(section),
            summary: section.summary().map(String::from),
            description: section
                .description
                .as_ref()
                .map(Description::to_markdown)
                .unwrap_or_default(),
            params: section
                .params()
                .iter()
                .map(|p| ParamView::new(p, &section.tags, flavor))
                .collect(),
            has_params: has_tagged_param(section.params(), &section.tags),
            returns: section.returns().first().map(|r| ReturnView {
                type_name: r
                    .ty
                    .as_ref()
                    .and_then(|t| t.display_name())
                    .unwrap_or_else(|| "any".to_string()),
                description: table_cell(
                    r.description
                        .as_ref()
                        .map(Description::to_markdown)
                        .unwrap_or_default(),
                    flavor,
                ),
            }),
            examples: section
                .examples
                .iter()
                .map(|e| e.description.clone())
                .collect(),
            members,
            is_static: section.scope.as_deref() == Some("static"),
        }
    }
}

/// Display data for one parameter
#[derive(Debug, Clone, Serialize)]
pub struct ParamView {
    /// Parameter name
    pub name: String,
    /// Type name without line breaks, `any` when undeclared
    pub type_name: String,
    /// Default value
    pub default: Option<String>,
    /// Whether the parameter is optional
    pub optional: bool,
    /// Description from the `@param` tag, else the parameter's own summary
    pub description: String,
}

impl ParamView {
    /// Build the view of a parameter
    pub fn new(param: &Parameter, tags: &[Tag], flavor: Flavor) -> Self {
        let tag_text = find_tag(tags, param.line_number).and_then(|t| t.description.clone());
        let own_text = param
            .description
            .as_ref()
            .and_then(Description::summary)
            .map(String::from);

        Self {
            name: param.name.clone(),
            type_name: param
                .ty
                .as_ref()
                .and_then(|t| {
                    t.display_name()
                        .or_else(|| t.expression.as_ref().and_then(|e| e.display_name()))
                })
                .unwrap_or_else(|| "any".to_string()),
            default: param.default.clone(),
            optional: param.is_optional(),
            description: table_cell(tag_text.or(own_text).unwrap_or_default(), flavor),
        }
    }
}

/// Display data for a return value
#[derive(Debug, Clone, Serialize)]
pub struct ReturnView {
    /// Type name without line breaks
    pub type_name: String,
    /// Description as Markdown
    pub description: String,
}

/// Markdown table rows end at a line break, so cell text is kept on one line
fn table_cell(text: String, flavor: Flavor) -> String {
    match flavor {
        Flavor::Markdown if text.contains('\n') => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        _ => text,
    }
}

/// Whether at least one parameter has a `@param` tag on the same line
pub fn has_tagged_param(params: &[Parameter], tags: &[Tag]) -> bool {
    params
        .iter()
        .any(|p| find_tag(tags, p.line_number).is_some())
}
