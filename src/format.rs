//! Splitting long output into transport-sized pages.

use std::fmt::Write as _;

use crate::candidate::Candidate;
use crate::config::Config;

/// Split `text` into pages of at most `page_length` characters.
///
/// A page ends just before the last delimiter found in its window (ignoring
/// the window's first character), so the delimiter opens the next page. With
/// no delimiter the window is cut hard. Pages consisting only of spaces are
/// skipped, as is a whitespace-only tail.
pub fn pagify(text: &str, delims: &[char], page_length: usize) -> Vec<String> {
    let page_length = page_length.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut pages = Vec::new();
    let mut start = 0;
    while chars.len() - start > page_length {
        let window = &chars[start..start + page_length];
        let cut = window
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, c)| delims.contains(c))
            .map_or(page_length, |(i, _)| i);
        let page: String = window[..cut].iter().collect();
        if !page.trim_matches(' ').is_empty() {
            pages.push(page);
        }
        start += cut;
    }
    let tail: String = chars[start..].iter().collect();
    if !tail.trim().is_empty() {
        pages.push(tail);
    }
    pages
}

/// Pages of `text` sized for one transport unit, split on newlines.
pub fn paginate(text: &str, config: &Config) -> Vec<String> {
    pagify(text, &['\n'], config.page_length())
}

/// The first `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    text.char_indices()
        .nth(limit)
        .map_or(text, |(end, _)| &text[..end])
}

/// Numbered candidate listing, paged and fenced as code blocks.
pub fn render_candidates(candidates: &[Candidate], config: &Config) -> Vec<String> {
    if candidates.is_empty() {
        return Vec::new();
    }
    let mut listing = String::from("Possible solutions:\n");
    for candidate in candidates {
        let _ = writeln!(listing, "{}: {}", candidate.index, candidate.text);
    }
    paginate(&listing, config)
        .into_iter()
        .map(|page| format!("```\n{page}\n```"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_page() {
        assert_eq!(pagify("hello", &['\n'], 10), vec!["hello"]);
        assert!(pagify("", &['\n'], 10).is_empty());
        assert!(pagify(" \n ", &['\n'], 10).is_empty());
    }

    #[test]
    fn cuts_before_last_delimiter_in_window() {
        let pages = pagify("aaa\nbbb\ncccc", &['\n'], 8);
        assert_eq!(pages, vec!["aaa\nbbb", "\ncccc"]);
        let pages = pagify("aaa\nbbbbbbb", &['\n'], 6);
        assert_eq!(pages, vec!["aaa", "\nbbbbb", "bb"]);
    }

    #[test]
    fn hard_cut_without_delimiter() {
        let pages = pagify("abcdefghij", &['\n'], 4);
        assert_eq!(pages, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn delimiter_at_window_start_is_ignored() {
        let pages = pagify("\nabcdef", &['\n'], 4);
        assert_eq!(pages, vec!["\nabc", "def"]);
    }

    #[test]
    fn pages_count_characters_not_bytes() {
        let text = "\u{2801}".repeat(5);
        let pages = pagify(&text, &[], 2);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].chars().count(), 2);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("\u{2801}\u{2803}\u{2809}", 2), "\u{2801}\u{2803}");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn candidates_render_numbered_and_fenced() {
        let candidates = vec![
            Candidate::new(0, "x".into()),
            Candidate::new(1, "Hi".into()),
        ];
        let pages = render_candidates(&candidates, &Config::default());
        assert_eq!(pages, vec!["```\nPossible solutions:\n1: x\n2: Hi\n\n```"]);
        assert!(render_candidates(&[], &Config::default()).is_empty());
    }

    #[test]
    fn rendered_pages_fit_the_transport_limit() {
        let candidates: Vec<Candidate> = (0..16)
            .map(|row| Candidate::new(row, "z".repeat(400)))
            .collect();
        let config = Config::default();
        let pages = render_candidates(&candidates, &config);
        assert!(pages.len() > 1);
        for page in &pages {
            assert!(page.chars().count() <= config.max_message_len);
        }
    }
}
