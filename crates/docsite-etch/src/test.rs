//! Test utilities and fixtures for docsite-etch.
//!
//! # Example
//!
//! ```
//! use docsite_etch::test::{mock_class_section, mock_function_section};
//!
//! let class = mock_class_section("ServiceBroker");
//! let func = mock_function_section("call");
//! assert_eq!(class.members.instance.len(), 1);
//! assert_eq!(func.params().len(), 2);
//! ```

use crate::js_doc::{Description, Tag};
use crate::params::{Parameter, ReturnDescriptor};
use crate::section::{Callable, Section, SectionDef};
use crate::types::TypeDescriptor;

/// Create a documented function with two parameters and a return type.
///
/// Signature: `name(actionName: String, opts): Promise`; `actionName` and
/// `opts` are backed by `@param` tags on lines 3 and 4.
pub fn mock_function_section(name: &str) -> Section {
    let params = vec![
        Parameter::named("actionName")
            .with_type(TypeDescriptor::named("String"))
            .at_line(3),
        Parameter::named("opts")
            .with_type(TypeDescriptor::optional(TypeDescriptor::named("Object")))
            .with_default("{}")
            .at_line(4),
    ];
    let returns = vec![ReturnDescriptor::of(TypeDescriptor::named("Promise"))];

    Section::new(name, SectionDef::Function(Callable::new(params, returns)))
        .with_description(Description::plain(format!("Call the {} method.", name)))
        .with_tags(vec![
            Tag::new("param", 3)
                .with_name("actionName")
                .with_description("Name of action"),
            Tag::new("param", 4)
                .with_name("opts")
                .with_description("Call options"),
        ])
}

/// Create a documented class with a `broker` constructor parameter and one
/// instance method, `call`.
pub fn mock_class_section(name: &str) -> Section {
    let params = vec![Parameter::named("broker")
        .with_type(TypeDescriptor::named("ServiceBroker"))
        .at_line(2)];

    let mut method = mock_function_section("call").with_memberof(name);
    method.scope = Some("instance".to_string());

    let mut class = Section::new(name, SectionDef::Class(Callable::new(params, vec![])))
        .with_description(Description::plain(format!("{} class.", name)))
        .with_tags(vec![Tag::new("param", 2)
            .with_name("broker")
            .with_description("Broker instance")]);
    class.members.instance.push(method);
    class
}

/// documentation.js JSON for a small file: a class with a constructor
/// member, a method and a static constant.
pub fn mock_sections_json(class_name: &str) -> String {
    format!(
        r#"[{{
  "kind": "class",
  "name": "{class}",
  "description": {{"type": "root", "children": [{{"type": "paragraph", "children": [{{"type": "text", "value": "The {class} class."}}]}}]}},
  "tags": [{{"title": "param", "name": "options", "lineNumber": 3, "description": "Broker options"}}],
  "params": [{{"title": "param", "name": "options", "lineNumber": 3, "type": {{"type": "NameExpression", "name": "Object"}}}}],
  "returns": [],
  "examples": [{{"description": "const b = new {class}();"}}],
  "members": {{
    "static": [{{"kind": "constant", "name": "PROTOCOL_VERSION", "memberof": "{class}", "scope": "static"}}],
    "instance": [
      {{"kind": "function", "name": "start", "memberof": "{class}", "scope": "instance",
        "returns": [{{"type": {{"type": "NameExpression", "name": "Promise"}}}}]}},
      {{"name": "constructor", "memberof": "{class}", "scope": "instance",
        "params": [{{"name": "options", "type": {{"type": "NameExpression", "name": "Object"}}}}]}}
    ],
    "inner": [], "events": [], "global": []
  }}
}}]"#,
        class = class_name
    )
}
