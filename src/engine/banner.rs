// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Leading banner comment removal.
//!
//! Only the very start of a body is examined. One banner is removed, together
//! with the whitespace around it; comments further down are left alone.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Which kinds of leading comment count as a banner.
///
/// The all-false default still strips ordinary `/* ... */` banners. It only
/// keeps `/*! ... */` ones, which conventionally carry license text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StripBanners {
    /// Also strip `/*! ... */` banners.
    pub block: bool,
    /// Also strip a leading run of `//` comment lines.
    pub line: bool,
}

const BLOCK_ANY: &str = r"/\*[\s\S]*?\*/";
const BLOCK_UNPRESERVED: &str = r"/\*[^!][\s\S]*?\*/";
const LINE_RUN: &str = r"(?:.*//.*\r?\n)*\s*";

fn banner_pattern(block: &str, line: Option<&str>) -> Regex {
    let alternatives = match line {
        Some(line) => format!("{block}|{line}"),
        None => block.to_string(),
    };
    Regex::new(&format!(r"^\s*(?:{alternatives})\s*")).expect("banner pattern is valid")
}

static UNPRESERVED_BLOCK: Lazy<Regex> = Lazy::new(|| banner_pattern(BLOCK_UNPRESERVED, None));
static ANY_BLOCK: Lazy<Regex> = Lazy::new(|| banner_pattern(BLOCK_ANY, None));
static UNPRESERVED_BLOCK_OR_LINES: Lazy<Regex> =
    Lazy::new(|| banner_pattern(BLOCK_UNPRESERVED, Some(LINE_RUN)));
static ANY_BLOCK_OR_LINES: Lazy<Regex> = Lazy::new(|| banner_pattern(BLOCK_ANY, Some(LINE_RUN)));

/// Remove the leading banner from `source`, if it has one.
///
/// ```
/// use concat_depends::engine::banner::{strip_banner, StripBanners};
///
/// let src = "/* generated */\nvar a = 1;\n";
/// assert_eq!(strip_banner(src, StripBanners::default()), "var a = 1;\n");
/// ```
pub fn strip_banner(source: &str, mode: StripBanners) -> String {
    let pattern: &Regex = match (mode.block, mode.line) {
        (false, false) => &UNPRESERVED_BLOCK,
        (true, false) => &ANY_BLOCK,
        (false, true) => &UNPRESERVED_BLOCK_OR_LINES,
        (true, true) => &ANY_BLOCK_OR_LINES,
    };
    pattern.replace(source, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER1: &str =
        "/* THIS\n * IS\n * A\n * SAMPLE\n * BANNER!\n */\n\n// Comment\n\n/* Comment */\n";
    const BANNER2: &str = "\n/*! SAMPLE\n * BANNER */\n\n// Comment\n\n/* Comment */\n";
    const BANNER3: &str =
        "\n// This is\n// A sample\n// Banner\n\n// But this is not\n\n/* And neither\n * is this\n */\n";

    const BLOCK: StripBanners = StripBanners {
        block: true,
        line: false,
    };
    const LINE: StripBanners = StripBanners {
        block: false,
        line: true,
    };
    const BOTH: StripBanners = StripBanners {
        block: true,
        line: true,
    };

    #[test]
    fn default_strips_plain_block_banner() {
        assert_eq!(
            strip_banner(BANNER1, StripBanners::default()),
            "// Comment\n\n/* Comment */\n"
        );
    }

    #[test]
    fn default_keeps_preserved_banner() {
        assert_eq!(strip_banner(BANNER2, StripBanners::default()), BANNER2);
    }

    #[test]
    fn default_keeps_line_banner() {
        assert_eq!(strip_banner(BANNER3, StripBanners::default()), BANNER3);
    }

    #[test]
    fn block_strips_preserved_banner() {
        assert_eq!(strip_banner(BANNER2, BLOCK), "// Comment\n\n/* Comment */\n");
        assert_eq!(strip_banner(BANNER3, BLOCK), BANNER3);
    }

    #[test]
    fn line_strips_leading_comment_lines() {
        assert_eq!(
            strip_banner(BANNER3, LINE),
            "// But this is not\n\n/* And neither\n * is this\n */\n"
        );
    }

    #[test]
    fn block_and_line_together() {
        assert_eq!(strip_banner(BANNER2, BOTH), "// Comment\n\n/* Comment */\n");
        assert_eq!(
            strip_banner(BANNER3, BOTH),
            "// But this is not\n\n/* And neither\n * is this\n */\n"
        );
    }

    #[test]
    fn only_the_first_banner_goes() {
        let src = "/* one */\n/* two */\nbody";
        assert_eq!(strip_banner(src, StripBanners::default()), "/* two */\nbody");
    }

    #[test]
    fn banner_must_lead() {
        let src = "var a;\n/* not a banner */\n";
        assert_eq!(strip_banner(src, BOTH), src);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let mode: StripBanners = serde_yaml::from_str("line: true").unwrap();
        assert_eq!(mode, LINE);
    }
}
