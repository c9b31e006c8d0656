//! Parameter definition types
//!
//! This module provides the parameter and return descriptors of documented
//! callables, and the formatting used inside signatures.

use crate::js_doc::Description;
use crate::types::TypeDescriptor;
use serde::{Deserialize, Serialize};

/// A documented parameter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name
    #[serde(default)]
    pub name: String,

    /// Declared type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub ty: Option<TypeDescriptor>,

    /// Default value as written in the comment
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<String>,

    /// Parameter documentation
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<Description>,

    /// Line of the `@param` tag inside the comment
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line_number: Option<u32>,
}

impl Parameter {
    /// Create a parameter with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the type
    pub fn with_type(mut self, ty: TypeDescriptor) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Set default value
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the tag line number
    pub fn at_line(mut self, line: u32) -> Self {
        self.line_number = Some(line);
        self
    }

    /// Whether the declared type is an `OptionalType`
    pub fn is_optional(&self) -> bool {
        self.ty.as_ref().is_some_and(TypeDescriptor::is_optional)
    }
}

/// A documented return value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReturnDescriptor {
    /// Returned type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub ty: Option<TypeDescriptor>,

    /// Return documentation
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<Description>,
}

impl ReturnDescriptor {
    /// Create a return descriptor of the given type
    pub fn of(ty: TypeDescriptor) -> Self {
        Self {
            ty: Some(ty),
            description: None,
        }
    }
}

/// Format one parameter for a signature.
///
/// The short form shows optionality and defaults, the full form shows the
/// type name.
pub fn format_parameter(param: &Parameter, short: bool) -> String {
    if short {
        if param.is_optional() {
            return match param.default.as_deref().filter(|d| !d.is_empty()) {
                Some(default) => format!("{} = {}", param.name, default),
                None => format!("{}?", param.name),
            };
        }
        return param.name.clone();
    }

    let type_name = param
        .ty
        .as_ref()
        .and_then(TypeDescriptor::display_name)
        .filter(|name| !name.is_empty());
    match type_name {
        Some(type_name) => format!("{}: {}", param.name, type_name),
        None => param.name.clone(),
    }
}

/// Format a parenthesized, comma separated parameter list
pub fn format_parameter_list(params: &[Parameter], short: bool) -> String {
    let formatted: Vec<String> = params.iter().map(|p| format_parameter(p, short)).collect();
    format!("({})", formatted.join(", "))
}
