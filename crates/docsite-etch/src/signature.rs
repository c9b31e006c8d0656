//! Display signatures
//!
//! Turns a [`Section`] into the heading shown for it in generated pages,
//! e.g. `call(actionName: String, params: Object): Promise` or
//! `new ServiceBroker(options: Object)`.

use crate::params::format_parameter_list;
use crate::section::{Section, SectionDef};
use serde::{Deserialize, Serialize};

/// Output flavor a signature is rendered for.
///
/// Markdown pages show class-member constructors as `new Owner(...)`;
/// HTML pages show them like any other function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Markdown pages for the static site
    #[default]
    Markdown,
    /// Standalone HTML pages
    Html,
}

impl Flavor {
    /// File extension of pages in this flavor
    pub fn extension(&self) -> &'static str {
        match self {
            Flavor::Markdown => "md",
            Flavor::Html => "html",
        }
    }
}

/// Whether a section is shown with a call signature.
///
/// Functions are, and so are typedefs aliasing the bare `Function` type.
pub fn is_callable(section: &Section) -> bool {
    match &section.def {
        SectionDef::Function(_) => true,
        SectionDef::Typedef { ty: Some(ty), .. } => ty.is_function_name(),
        _ => false,
    }
}

/// Full signature of a section
pub fn signature(section: &Section, flavor: Flavor) -> String {
    let prefix = if section.is_class() {
        "new "
    } else if flavor == Flavor::Markdown && section.name == "constructor" {
        return format!(
            "new {}{}",
            section.memberof.as_deref().unwrap_or_default(),
            format_parameter_list(section.params(), false)
        );
    } else if !is_callable(section) {
        return section.name.clone();
    } else {
        ""
    };

    let returns = section
        .returns()
        .first()
        .and_then(|r| r.ty.as_ref())
        .and_then(|ty| ty.name.as_deref())
        .map(|name| format!(": {}", name))
        .unwrap_or_default();

    format!(
        "{}{}{}{}",
        prefix,
        section.name,
        format_parameter_list(section.params(), false),
        returns
    )
}

/// Compact signature with optional markers and defaults instead of types.
///
/// Non-callable sections render as their bare name.
pub fn short_signature(section: &Section) -> String {
    if section.is_class() || is_callable(section) {
        format!(
            "{}{}",
            section.name,
            format_parameter_list(section.params(), true)
        )
    } else {
        section.name.clone()
    }
}
