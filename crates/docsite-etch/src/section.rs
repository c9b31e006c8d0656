//! Documented sections
//!
//! A [`Section`] is one documented entity (function, class, typedef,
//! variable, ...) as reported by the extractor. The extractor's JSON carries
//! every field on every entity; here the shape is decided once, when the JSON
//! is read, and each [`SectionDef`] variant only holds what its kind uses.

use crate::diagnostics::{EtchError, EtchResult};
use crate::js_doc::{Description, Example, Tag};
use crate::params::{Parameter, ReturnDescriptor};
use crate::types::TypeDescriptor;
use serde::Deserialize;
use std::path::Path;

/// Parameters and return values of something that can be called
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Callable {
    /// Parameters in source order
    pub params: Vec<Parameter>,
    /// Documented return values, only the first one is displayed
    pub returns: Vec<ReturnDescriptor>,
}

impl Callable {
    /// Create a callable from parameters and returns
    pub fn new(params: Vec<Parameter>, returns: Vec<ReturnDescriptor>) -> Self {
        Self { params, returns }
    }
}

/// Kind of a value-like section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// `@var` / `@variable`
    Variable,
    /// `@member` (class fields)
    Member,
    /// `@constant`
    Constant,
}

impl VariableKind {
    /// The extractor's name for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKind::Variable => "variable",
            VariableKind::Member => "member",
            VariableKind::Constant => "constant",
        }
    }
}

/// Kind-specific content of a section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionDef {
    /// A function or method
    Function(Callable),
    /// A class, the callable describes its constructor
    Class(Callable),
    /// A `@typedef`
    Typedef {
        /// Aliased type
        ty: Option<TypeDescriptor>,
        /// Parameters and returns documented on the typedef
        callable: Callable,
    },
    /// A variable, member or constant
    Variable {
        /// Which value kind
        kind: VariableKind,
        /// Declared type
        ty: Option<TypeDescriptor>,
        /// Parameters, documented on a `constructor` member
        params: Vec<Parameter>,
    },
    /// Anything else (namespace, event, module, ...) or no kind at all
    Other {
        /// The raw kind, if any
        kind: Option<String>,
        /// Parameters documented on the entity
        params: Vec<Parameter>,
    },
}

/// Child sections grouped the way the extractor groups them
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Members {
    /// Static members (`Class.member`)
    #[serde(rename = "static", default)]
    pub static_members: Vec<Section>,
    /// Instance members (`Class#member`)
    #[serde(default)]
    pub instance: Vec<Section>,
    /// Inner members (`Class~member`)
    #[serde(default)]
    pub inner: Vec<Section>,
    /// Events
    #[serde(default)]
    pub events: Vec<Section>,
    /// Globals
    #[serde(default)]
    pub global: Vec<Section>,
}

impl Members {
    /// Whether there are no members at all
    pub fn is_empty(&self) -> bool {
        self.static_members.is_empty()
            && self.instance.is_empty()
            && self.inner.is_empty()
            && self.events.is_empty()
            && self.global.is_empty()
    }
}

/// One documented entity
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSection")]
pub struct Section {
    /// Identifier
    pub name: String,
    /// Owning class or namespace
    pub memberof: Option<String>,
    /// `static`, `instance`, `inner` or `global`
    pub scope: Option<String>,
    /// Description tree
    pub description: Option<Description>,
    /// Raw tags of the comment
    pub tags: Vec<Tag>,
    /// `@example` blocks
    pub examples: Vec<Example>,
    /// Child sections
    pub members: Members,
    /// Kind-specific content
    pub def: SectionDef,
}

impl Section {
    /// Create a section with no documentation around it
    pub fn new(name: impl Into<String>, def: SectionDef) -> Self {
        Self {
            name: name.into(),
            memberof: None,
            scope: None,
            description: None,
            tags: vec![],
            examples: vec![],
            members: Members::default(),
            def,
        }
    }

    /// Set the owning class
    pub fn with_memberof(mut self, owner: impl Into<String>) -> Self {
        self.memberof = Some(owner.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    /// Set the raw tags
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// The extractor's kind name, empty when the section had none
    pub fn kind_name(&self) -> &str {
        match &self.def {
            SectionDef::Function(_) => "function",
            SectionDef::Class(_) => "class",
            SectionDef::Typedef { .. } => "typedef",
            SectionDef::Variable { kind, .. } => kind.as_str(),
            SectionDef::Other { kind, .. } => kind.as_deref().unwrap_or(""),
        }
    }

    /// Whether this is a class
    pub fn is_class(&self) -> bool {
        matches!(self.def, SectionDef::Class(_))
    }

    /// Documented parameters
    pub fn params(&self) -> &[Parameter] {
        match &self.def {
            SectionDef::Function(c) | SectionDef::Class(c) => &c.params,
            SectionDef::Typedef { callable, .. } => &callable.params,
            SectionDef::Variable { params, .. } | SectionDef::Other { params, .. } => params,
        }
    }

    /// Documented return values
    pub fn returns(&self) -> &[ReturnDescriptor] {
        match &self.def {
            SectionDef::Function(c) | SectionDef::Class(c) => &c.returns,
            SectionDef::Typedef { callable, .. } => &callable.returns,
            SectionDef::Variable { .. } | SectionDef::Other { .. } => &[],
        }
    }

    /// Declared type of typedefs and variables
    pub fn ty(&self) -> Option<&TypeDescriptor> {
        match &self.def {
            SectionDef::Typedef { ty, .. } | SectionDef::Variable { ty, .. } => ty.as_ref(),
            _ => None,
        }
    }

    /// One-line summary from the description
    pub fn summary(&self) -> Option<&str> {
        self.description.as_ref().and_then(Description::summary)
    }
}

/// The extractor's flat JSON shape
#[derive(Debug, Deserialize)]
struct RawSection {
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    memberof: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    params: Option<Vec<Parameter>>,
    #[serde(default)]
    returns: Vec<ReturnDescriptor>,
    #[serde(rename = "type", default)]
    ty: Option<TypeDescriptor>,
    #[serde(default)]
    description: Option<Description>,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    examples: Vec<Example>,
    #[serde(default)]
    members: Members,
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        let params = raw.params.unwrap_or_default();
        let def = match raw.kind.as_deref() {
            Some("function") => SectionDef::Function(Callable::new(params, raw.returns)),
            Some("class") => SectionDef::Class(Callable::new(params, raw.returns)),
            Some("typedef") => SectionDef::Typedef {
                ty: raw.ty,
                callable: Callable::new(params, raw.returns),
            },
            Some("variable") | Some("var") => SectionDef::Variable {
                kind: VariableKind::Variable,
                ty: raw.ty,
                params,
            },
            Some("member") => SectionDef::Variable {
                kind: VariableKind::Member,
                ty: raw.ty,
                params,
            },
            Some("constant") => SectionDef::Variable {
                kind: VariableKind::Constant,
                ty: raw.ty,
                params,
            },
            _ => SectionDef::Other {
                kind: raw.kind,
                params,
            },
        };

        Section {
            name: raw.name,
            memberof: raw.memberof,
            scope: raw.scope,
            description: raw.description,
            tags: raw.tags,
            examples: raw.examples,
            members: raw.members,
            def,
        }
    }
}

/// Parse the extractor's JSON output (an array of sections)
pub fn parse_sections(json: &str, file: &Path) -> EtchResult<Vec<Section>> {
    serde_json::from_str(json).map_err(|e| EtchError::parse(file, e.to_string()))
}
