//! Type expressions attached to parameters, returns and typedefs
//!
//! The extractor emits Doctrine-style type expressions: a `type` tag plus
//! tag-specific fields. Only the handful of tags the generator inspects get
//! their own variant; everything else is carried as [`TypeKind::Other`].

use serde::{Deserialize, Serialize};

/// Tag of a type expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TypeKind {
    /// A bare name such as `String` or `Function`
    NameExpression,
    /// `[name]` / `name=` optional parameter type
    OptionalType,
    /// Generic application such as `Array<String>`
    TypeApplication,
    /// `(A|B)`
    UnionType,
    /// `*`
    AllLiteral,
    /// Any other tag, or no tag at all
    #[default]
    #[serde(other)]
    Other,
}

/// A type expression
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Expression tag
    #[serde(rename = "type", default)]
    pub kind: TypeKind,

    /// Display name, may contain newlines when the source comment wrapped
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Wrapped expression for `OptionalType` and friends
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expression: Option<Box<TypeDescriptor>>,
}

impl TypeDescriptor {
    /// Create a `NameExpression`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::NameExpression,
            name: Some(name.into()),
            expression: None,
        }
    }

    /// Wrap an expression in an `OptionalType`
    pub fn optional(inner: TypeDescriptor) -> Self {
        Self {
            kind: TypeKind::OptionalType,
            name: None,
            expression: Some(Box::new(inner)),
        }
    }

    /// Whether this is an `OptionalType`
    pub fn is_optional(&self) -> bool {
        self.kind == TypeKind::OptionalType
    }

    /// Whether this is the bare `Function` name expression
    pub fn is_function_name(&self) -> bool {
        self.kind == TypeKind::NameExpression && self.name.as_deref() == Some("Function")
    }

    /// Name with embedded line breaks removed
    pub fn display_name(&self) -> Option<String> {
        self.name.as_ref().map(|n| n.replace('\n', ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_name_expression() {
        let ty: TypeDescriptor =
            serde_json::from_str(r#"{"type":"NameExpression","name":"Function"}"#).unwrap();
        assert_eq!(ty.kind, TypeKind::NameExpression);
        assert!(ty.is_function_name());
    }

    #[test]
    fn test_unknown_and_missing_tags() {
        let ty: TypeDescriptor =
            serde_json::from_str(r#"{"type":"RecordType","fields":[]}"#).unwrap();
        assert_eq!(ty.kind, TypeKind::Other);

        let ty: TypeDescriptor = serde_json::from_str(r#"{"name":"string"}"#).unwrap();
        assert_eq!(ty.kind, TypeKind::Other);
        assert_eq!(ty.name.as_deref(), Some("string"));
    }

    #[test]
    fn test_optional_wraps_expression() {
        let ty: TypeDescriptor = serde_json::from_str(
            r#"{"type":"OptionalType","expression":{"type":"NameExpression","name":"Number"}}"#,
        )
        .unwrap();
        assert!(ty.is_optional());
        assert_eq!(ty.name, None);
        assert_eq!(ty, TypeDescriptor::optional(TypeDescriptor::named("Number")));
    }

    #[test]
    fn test_display_name_strips_newlines() {
        let ty = TypeDescriptor::named("Object\n|String");
        assert_eq!(ty.display_name().as_deref(), Some("Object|String"));
        assert!(!ty.is_function_name());
    }
}
