//! JSDoc comment content as produced by the extractor
//!
//! Descriptions arrive as a Markdown syntax tree (remark's mdast). This
//! module models that tree loosely, plus the raw `@tag` list and `@example`
//! blocks, and provides the two views the generator needs: a one-line summary
//! and Markdown source text.

use crate::types::TypeDescriptor;
use serde::{Deserialize, Serialize};

/// A node of a description syntax tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    /// Node type (`root`, `paragraph`, `text`, `inlineCode`, ...)
    #[serde(rename = "type", default)]
    pub node_type: String,

    /// Literal value for leaf nodes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<String>,

    /// Link target
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,

    /// Code block language
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lang: Option<String>,

    /// Heading depth
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub depth: Option<u8>,

    /// Ordered list marker
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ordered: Option<bool>,

    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Description>,
}

impl Description {
    /// Create a leaf text node
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            node_type: "text".to_string(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Create a node with children
    pub fn node(node_type: impl Into<String>, children: Vec<Description>) -> Self {
        Self {
            node_type: node_type.into(),
            children,
            ..Default::default()
        }
    }

    /// A root holding one paragraph of plain text
    pub fn plain(text: impl Into<String>) -> Self {
        Self::node(
            "root",
            vec![Self::node("paragraph", vec![Self::text(text)])],
        )
    }

    /// First text of the first paragraph.
    ///
    /// Only looks at the first child: a description opening with a code block
    /// or a list has no summary.
    pub fn summary(&self) -> Option<&str> {
        let first = self.children.first()?;
        if first.node_type != "paragraph" {
            return None;
        }
        first.children.first()?.value.as_deref()
    }

    /// Render the tree back to Markdown source
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        self.write_markdown(&mut out);
        out.trim_end().to_string()
    }

    fn write_children(&self, out: &mut String) {
        for child in &self.children {
            child.write_markdown(out);
        }
    }

    fn write_markdown(&self, out: &mut String) {
        let value = self.value.as_deref().unwrap_or("");
        match self.node_type.as_str() {
            "root" => self.write_children(out),
            "paragraph" => {
                self.write_children(out);
                out.push_str("\n\n");
            }
            "text" | "html" => out.push_str(value),
            "inlineCode" => {
                out.push('`');
                out.push_str(value);
                out.push('`');
            }
            "code" => {
                out.push_str("```");
                out.push_str(self.lang.as_deref().unwrap_or(""));
                out.push('\n');
                out.push_str(value);
                out.push_str("\n```\n\n");
            }
            "emphasis" => {
                out.push('_');
                self.write_children(out);
                out.push('_');
            }
            "strong" => {
                out.push_str("**");
                self.write_children(out);
                out.push_str("**");
            }
            "link" => {
                out.push('[');
                self.write_children(out);
                out.push_str("](");
                out.push_str(self.url.as_deref().unwrap_or(""));
                out.push(')');
            }
            "heading" => {
                let depth = self.depth.unwrap_or(1).clamp(1, 6) as usize;
                out.push_str(&"#".repeat(depth));
                out.push(' ');
                self.write_children(out);
                out.push_str("\n\n");
            }
            "list" => {
                let ordered = self.ordered.unwrap_or(false);
                for (i, item) in self.children.iter().enumerate() {
                    if ordered {
                        out.push_str(&format!("{}. ", i + 1));
                    } else {
                        out.push_str("- ");
                    }
                    let mut item_md = String::new();
                    item.write_children(&mut item_md);
                    out.push_str(item_md.trim_end());
                    out.push('\n');
                }
                out.push('\n');
            }
            "break" => out.push_str("  \n"),
            _ => {
                if self.children.is_empty() {
                    out.push_str(value);
                } else {
                    self.write_children(out);
                }
            }
        }
    }
}

/// A raw `@tag` from the comment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag title without the `@` (`param`, `returns`, `memberof`, ...)
    pub title: String,

    /// Tag subject, e.g. the parameter name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Free text following the tag
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Line of the tag inside the comment
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line_number: Option<u32>,

    /// Declared type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub ty: Option<TypeDescriptor>,
}

impl Tag {
    /// Create a tag with a title and line number
    pub fn new(title: impl Into<String>, line_number: u32) -> Self {
        Self {
            title: title.into(),
            line_number: Some(line_number),
            ..Default::default()
        }
    }

    /// Set the tag subject
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the tag text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An `@example` block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Example {
    /// Example source code
    #[serde(default)]
    pub description: String,

    /// Optional `<caption>`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub caption: Option<Description>,
}

/// Find the tag written on the same comment line as `line_number`
pub fn find_tag(tags: &[Tag], line_number: Option<u32>) -> Option<&Tag> {
    let line = line_number?;
    tags.iter().find(|t| t.line_number == Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Description {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_summary_first_paragraph() {
        let desc = parse(
            r#"{"type":"root","children":[
                {"type":"paragraph","children":[
                    {"type":"text","value":"Call an action. "},
                    {"type":"inlineCode","value":"ctx.call"}
                ]},
                {"type":"paragraph","children":[{"type":"text","value":"Second"}]}
            ]}"#,
        );
        assert_eq!(desc.summary(), Some("Call an action. "));
    }

    #[test]
    fn test_summary_requires_leading_paragraph() {
        let desc = parse(
            r#"{"type":"root","children":[{"type":"code","lang":"js","value":"broker.start()"}]}"#,
        );
        assert_eq!(desc.summary(), None);
        assert_eq!(Description::default().summary(), None);
    }

    #[test]
    fn test_to_markdown() {
        let desc = parse(
            r#"{"type":"root","children":[
                {"type":"paragraph","children":[
                    {"type":"text","value":"Emit "},
                    {"type":"strong","children":[{"type":"text","value":"balanced"}]},
                    {"type":"text","value":" event, see "},
                    {"type":"link","url":"https://moleculer.services","children":[{"type":"text","value":"docs"}]}
                ]},
                {"type":"code","lang":"js","value":"broker.emit(\"user.created\")"}
            ]}"#,
        );
        assert_eq!(
            desc.to_markdown(),
            "Emit **balanced** event, see [docs](https://moleculer.services)\n\n```js\nbroker.emit(\"user.created\")\n```"
        );
    }

    #[test]
    fn test_list_to_markdown() {
        let desc = Description::node(
            "root",
            vec![Description {
                node_type: "list".to_string(),
                ordered: Some(false),
                children: vec![
                    Description::node("listItem", vec![Description::plain("one").children[0].clone()]),
                    Description::node("listItem", vec![Description::plain("two").children[0].clone()]),
                ],
                ..Default::default()
            }],
        );
        assert_eq!(desc.to_markdown(), "- one\n- two");
    }

    #[test]
    fn test_find_tag_by_line() {
        let tags = vec![
            Tag::new("param", 3).with_name("actionName"),
            Tag::new("param", 4).with_name("params"),
        ];
        assert_eq!(
            find_tag(&tags, Some(4)).and_then(|t| t.name.as_deref()),
            Some("params")
        );
        assert!(find_tag(&tags, Some(9)).is_none());
        assert!(find_tag(&tags, None).is_none());
    }
}
