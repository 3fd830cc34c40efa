// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_SEPARATOR;
use crate::engine::banner::{strip_banner, StripBanners};
use crate::engine::registry::FileRegistry;
use crate::errors::ConcatError;
use crate::traits::Transform;

/// How bodies are turned into the final output.
///
/// `banner` and `footer` are used verbatim; template expansion happens before
/// they get here.
#[derive(Clone, Copy)]
pub struct AssemblyOptions<'a> {
    pub separator: &'a str,
    pub banner: &'a str,
    pub footer: &'a str,
    pub strip_banners: Option<StripBanners>,
    pub transform: Option<&'a dyn Transform>,
}

impl Default for AssemblyOptions<'_> {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            banner: "",
            footer: "",
            strip_banners: None,
            transform: None,
        }
    }
}

/// Build `banner + body_1 + separator + ... + body_n + footer`.
///
/// Each body is transformed first and banner-stripped second. Names in `order`
/// that are not in `registry` contribute nothing.
pub fn assemble(
    order: &[String],
    registry: &FileRegistry,
    options: &AssemblyOptions<'_>,
) -> Result<String, ConcatError> {
    let mut bodies = Vec::with_capacity(order.len());
    for record in order.iter().filter_map(|name| registry.get(name)) {
        let mut body = match options.transform {
            Some(transform) => transform.apply(&record.source_text, &record.filepath)?,
            None => record.source_text.to_string(),
        };
        if let Some(mode) = options.strip_banners {
            body = strip_banner(&body, mode);
        }
        bodies.push(body);
    }

    let joined = bodies.join(options.separator);
    let mut output = String::with_capacity(options.banner.len() + joined.len() + options.footer.len());
    output.push_str(options.banner);
    output.push_str(&joined);
    output.push_str(options.footer);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::FileRecord;
    use crate::errors::Diagnostics;
    use std::path::Path;
    use std::sync::Arc;

    fn registry(files: &[(&str, &str)]) -> FileRegistry {
        let mut registry = FileRegistry::new();
        let mut diagnostics = Diagnostics::new();
        for (path, text) in files {
            registry.register(FileRecord::new(*path, Arc::from(*text)), &mut diagnostics);
        }
        registry
    }

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn banner_bodies_separator_footer() {
        let registry = registry(&[("fixtures/a.js", "var a;"), ("fixtures/b.js", "var b;")]);
        let options = AssemblyOptions {
            separator: "\n;\n",
            banner: "<start>\n",
            footer: "<end>",
            ..Default::default()
        };

        let out = assemble(&order(&["a.js", "b.js"]), &registry, &options).unwrap();
        assert_eq!(out, "<start>\nvar a;\n;\nvar b;<end>");
    }

    #[test]
    fn follows_given_order_not_registration_order() {
        let registry = registry(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let options = AssemblyOptions {
            separator: ",",
            ..Default::default()
        };

        let out = assemble(&order(&["c", "a", "b"]), &registry, &options).unwrap();
        assert_eq!(out, "C,A,B");
    }

    #[test]
    fn empty_order_is_banner_and_footer() {
        let options = AssemblyOptions {
            banner: "top",
            footer: "bottom",
            ..Default::default()
        };
        let out = assemble(&[], &FileRegistry::new(), &options).unwrap();
        assert_eq!(out, "topbottom");
    }

    #[test]
    fn transform_sees_text_and_path() {
        let registry = registry(&[("lib/a.js", "A"), ("lib/b.js", "B")]);
        let annotate = |src: &str, path: &Path| format!("// Source: {}\n{}", path.display(), src);
        let options = AssemblyOptions {
            separator: "\n",
            transform: Some(&annotate),
            ..Default::default()
        };

        let out = assemble(&order(&["a.js", "b.js"]), &registry, &options).unwrap();
        assert_eq!(out, "// Source: lib/a.js\nA\n// Source: lib/b.js\nB");
    }

    #[test]
    fn strip_runs_after_transform() {
        let registry = registry(&[("a.js", "body")]);
        let add_banner = |src: &str, _: &Path| format!("/* added */\n{src}");
        let options = AssemblyOptions {
            transform: Some(&add_banner),
            strip_banners: Some(StripBanners::default()),
            ..Default::default()
        };

        let out = assemble(&order(&["a.js"]), &registry, &options).unwrap();
        assert_eq!(out, "body");
    }

    #[test]
    fn transform_error_aborts() {
        struct Failing;
        impl Transform for Failing {
            fn apply(&self, _: &str, _: &Path) -> Result<String, ConcatError> {
                Err(ConcatError::Template {
                    context: "a.js".to_string(),
                    message: "'x' is not defined".to_string(),
                })
            }
        }

        let registry = registry(&[("a.js", "<%= x %>")]);
        let options = AssemblyOptions {
            transform: Some(&Failing),
            ..Default::default()
        };

        let err = assemble(&order(&["a.js"]), &registry, &options).unwrap_err();
        assert!(matches!(err, ConcatError::Template { .. }));
    }
}
