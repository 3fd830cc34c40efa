// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `<%= key.path %>` template expansion.
//!
//! Used for banners and footers, and for file bodies when `process` is on.
//! Keys are dotted paths into a YAML mapping; scalars are substituted as text,
//! `null` expands to nothing, and anything else is an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;
use std::path::Path;

use crate::errors::ConcatError;
use crate::traits::Transform;

static TEMPLATE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<%=\s*([A-Za-z_$][\w$]*(?:\.[\w$]+)*)\s*%>").expect("template tag pattern is valid")
});

/// Expand every template tag in `template` against `data`.
///
/// `context` names what is being rendered and only shows up in errors.
///
/// ```
/// use concat_depends::backends::template::render;
///
/// let data: serde_yaml::Value = serde_yaml::from_str("banner_property: AWESOME").unwrap();
/// let out = render("/* THIS TEST IS <%= banner_property %> */\n", &data, "banner").unwrap();
///
/// assert_eq!(out, "/* THIS TEST IS AWESOME */\n");
/// ```
pub fn render(template: &str, data: &Value, context: &str) -> Result<String, ConcatError> {
    if !template.contains("<%") {
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in TEMPLATE_TAG.captures_iter(template) {
        let (Some(tag), Some(key)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&template[last..tag.start()]);
        out.push_str(&resolve(data, key.as_str(), context)?);
        last = tag.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

fn resolve(data: &Value, key: &str, context: &str) -> Result<String, ConcatError> {
    let mut current = data;
    for segment in key.split('.') {
        current = match current {
            Value::Mapping(map) => map.get(segment),
            _ => None,
        }
        .ok_or_else(|| ConcatError::Template {
            context: context.to_string(),
            message: format!("'{}' is not defined", key),
        })?;
    }

    match current {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        _ => Err(ConcatError::Template {
            context: context.to_string(),
            message: format!("'{}' is not a scalar value", key),
        }),
    }
}

/// Built-in body transform: expands each file as a template.
#[derive(Debug, Clone)]
pub struct TemplateTransform {
    data: Value,
}

impl TemplateTransform {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl Transform for TemplateTransform {
    fn apply(&self, source: &str, path: &Path) -> Result<String, ConcatError> {
        render(source, &self.data, &path.display().to_string())
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn text_without_tags_is_unchanged() {
        let out = render("plain text <% not a tag", &Value::Null, "banner").unwrap();
        assert_eq!(out, "plain text <% not a tag");
    }

    #[test]
    fn nested_keys_and_scalars() {
        let data = data("pkg:\n  name: widget\n  version: 3\n  beta: true\n  note: ~\n");
        let out = render(
            "<%= pkg.name %> v<%=pkg.version%> beta=<%= pkg.beta %>[<%= pkg.note %>]",
            &data,
            "banner",
        )
        .unwrap();

        assert_eq!(out, "widget v3 beta=true[]");
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = render("<%= nope %>", &data("a: 1"), "footer").unwrap_err();

        match err {
            ConcatError::Template { context, message } => {
                assert_eq!(context, "footer");
                assert!(message.contains("'nope' is not defined"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_scalar_is_an_error() {
        let err = render("<%= list %>", &data("list: [1, 2]"), "banner").unwrap_err();
        assert!(err.to_string().contains("not a scalar"));
    }

    #[test]
    fn transform_renders_file_bodies() {
        let transform = TemplateTransform::new(data("name: file1"));
        let out = transform
            .apply("// <%= name %>\nbody", Path::new("fixtures/file1"))
            .unwrap();

        assert_eq!(out, "// file1\nbody");
        assert_eq!(transform.name(), "template");
    }
}
