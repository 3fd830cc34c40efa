// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dependency declaration scanning.
//!
//! A declaration is a line that starts (after optional spaces or tabs) with a
//! comment marker, `//` or `///`, or with a bare single quote, followed by the
//! word `depend` or `depends` and a quoted name:
//!
//! ```text
//! /// <depends path="file5.js" />
//! // depends "file5.js"
//! ' depend 'file5.js'
//! ```
//!
//! The name is taken verbatim. Nothing checks that it is a sensible filename;
//! resolving it against the concatenation set happens later, in the sorter.

use once_cell::sync::Lazy;
use regex::Regex;

static DEPENDS_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*(?://+|')[ \t]*<?depends?\s+(?:path\s*=\s*)?["']([^"'\r\n]+)["']"#,
    )
    .expect("dependency declaration pattern is valid")
});

/// Every dependency name declared in `source`, in the order they appear.
///
/// # Example
/// ```
/// use concat_depends::engine::parser::parse_dependencies;
///
/// let source = "/// <depends path=\"file5\" />\n// depends \"file4\"\nvar file3 = 3;\n";
/// assert_eq!(parse_dependencies(source), vec!["file5", "file4"]);
/// ```
pub fn parse_dependencies(source: &str) -> Vec<String> {
    DEPENDS_DECLARATION
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_declarations() {
        assert!(parse_dependencies("").is_empty());
        assert!(parse_dependencies("var a = 1;\n// just a comment\n").is_empty());
    }

    #[test]
    fn triple_slash_reference_form() {
        let source = "/// <depends path=\"file5\" />\nvar file3 = 3;\n";
        assert_eq!(parse_dependencies(source), vec!["file5"]);
    }

    #[test]
    fn singular_depend_and_single_quotes() {
        let source = "/// <depend path='file5' />\n";
        assert_eq!(parse_dependencies(source), vec!["file5"]);
    }

    #[test]
    fn line_comment_form() {
        assert_eq!(parse_dependencies("// depends \"lib/util.js\""), vec!["lib/util.js"]);
        assert_eq!(parse_dependencies("//depends 'util.js'"), vec!["util.js"]);
    }

    #[test]
    fn bare_quote_form() {
        let source = "' depends \"Module1.bas\"\nSub Main()\n";
        assert_eq!(parse_dependencies(source), vec!["Module1.bas"]);
    }

    #[test]
    fn indented_declarations_are_recognized() {
        let source = "  \t// depends \"a\"\n";
        assert_eq!(parse_dependencies(source), vec!["a"]);
    }

    #[test]
    fn declaration_must_start_the_line() {
        let source = "var x = 1; // depends \"a\"\n";
        assert!(parse_dependencies(source).is_empty());
    }

    #[test]
    fn all_declarations_in_order() {
        let source = "// depends \"c\"\nbody\n/// <depends path=\"a\" />\n' depends \"b\"\n// depends \"c\"\n";
        assert_eq!(parse_dependencies(source), vec!["c", "a", "b", "c"]);
    }

    #[test]
    fn crlf_line_endings() {
        let source = "// depends \"a\"\r\n// depends \"b\"\r\nbody\r\n";
        assert_eq!(parse_dependencies(source), vec!["a", "b"]);
    }

    #[test]
    fn names_are_not_validated() {
        let source = "// depends \"not even a ../ file name?!\"\n";
        assert_eq!(parse_dependencies(source), vec!["not even a ../ file name?!"]);
    }
}
