//! Boilerplate cleaning for scraped markdown.
//!
//! Rule order is load-bearing: wiki markers first, then full-line
//! boilerplate, then blank-line collapsing, then an outer trim. Truncation
//! is deliberately NOT part of [`clean_markdown`] — cutting mid-line can
//! turn the remainder into a blacklist match, which would break the
//! clean-twice-equals-clean-once property. Callers truncate separately with
//! [`truncate_chars`].

use std::sync::LazyLock;

use regex::Regex;

static WIKI_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[.*?\]\]").expect("valid regex"));

/// Lines that are entirely a heading, a horizontal rule, a fully-bolded
/// line, or a known navigation/boilerplate word.
static BOILERPLATE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^(#{1,6}\s.*|---.*|\*\*.*\*\*|Menu|Navigation|Footer|Subscribe|Cookie|Privacy Policy)$")
        .expect("valid regex")
});

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Strips wiki-reference markers and boilerplate lines from scraped
/// markdown, collapses runs of blank lines, and trims the result.
///
/// Idempotent: cleaning already-cleaned text is a no-op.
#[must_use]
pub fn clean_markdown(markdown: &str) -> String {
    let text = WIKI_REF_RE.replace_all(markdown, "");
    let text = BOILERPLATE_LINE_RE.replace_all(&text, "");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");
    text.trim().to_owned()
}

/// Truncates to at most `budget` characters, never splitting a char.
#[must_use]
pub fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_wiki_reference_markers() {
        assert_eq!(clean_markdown("before [[ref 1]] after"), "before  after");
    }

    #[test]
    fn drops_heading_and_rule_lines() {
        let input = "## Section title\nkeep this\n---\nand this";
        assert_eq!(clean_markdown(input), "keep this\n\nand this");
    }

    #[test]
    fn drops_boilerplate_words_case_insensitively() {
        let input = "real sentence\nMENU\ncookie\nPrivacy Policy\nmore text";
        assert_eq!(clean_markdown(input), "real sentence\n\nmore text");
    }

    #[test]
    fn keeps_lines_that_merely_contain_boilerplate_words() {
        let input = "the menu at this restaurant\nSubscribe to our newsletter today";
        assert_eq!(clean_markdown(input), input);
    }

    #[test]
    fn drops_fully_bolded_lines_only() {
        let input = "**SHOUTY NAV ITEM**\npartly **bold** text survives";
        assert_eq!(clean_markdown(input), "partly **bold** text survives");
    }

    #[test]
    fn collapses_blank_runs_to_one_blank_line() {
        let input = "a\n\n\n\n\nb";
        assert_eq!(clean_markdown(input), "a\n\nb");
    }

    #[test]
    fn clean_is_idempotent() {
        let input = "# Heading\n[[cite]] body text\n\n\n\nMenu\nFooter\n**Bold nav**\nreal content\n";
        let once = clean_markdown(input);
        assert_eq!(clean_markdown(&once), once);
    }

    #[test]
    fn clean_of_empty_input_is_empty() {
        assert_eq!(clean_markdown(""), "");
        assert_eq!(clean_markdown("\n\n\n"), "");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let text = "héllo wörld";
        let cut = truncate_chars(text, 4);
        assert_eq!(cut, "héll");
        assert_eq!(cut.chars().count(), 4);
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_chars("short", 2000), "short");
    }
}
