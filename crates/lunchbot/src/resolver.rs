//! # Dish Resolver
//!
//! Maps what a user typed onto lines of the menu.
//!
//! Matching is case-insensitive. An exact line match wins outright; otherwise the query is
//! split on whitespace and each word must appear in the line, in order, with anything in
//! between (`"pollo arr"` matches `"pollo al forno con patate arrosto"`). Words are matched
//! literally, so `"menu (1)"` looks for parentheses rather than a regex group.

use regex::Regex;
use tracing::warn;

/// Returns the menu lines matching `query`, lower-cased, in menu order.
///
/// A single exact match is returned alone even when other lines would match fuzzily.
/// An empty query matches every line; callers reject empty requests before getting here.
pub fn resolve(query: &str, menu: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    let lines: Vec<String> = menu.trim().lines().map(str::to_lowercase).collect();

    if let Some(exact) = lines.iter().find(|line| **line == query) {
        return vec![exact.clone()];
    }

    let pattern = match fuzzy_pattern(&query) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!(%query, error = %e, "Query does not compile, nothing matches");
            return Vec::new();
        }
    };
    lines
        .into_iter()
        .filter(|line| pattern.is_match(line))
        .collect()
}

/// Escapes each word of `query` and joins them with `.*`.
///
/// Only an oversized query can fail to compile.
fn fuzzy_pattern(query: &str) -> Result<Regex, regex::Error> {
    let pattern = query
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_wins() {
        assert_eq!(resolve("Pasta", "Pasta\nPasta al pomodoro"), vec!["pasta"]);
    }

    #[test]
    fn test_exact_match_later_in_menu_still_wins() {
        assert_eq!(
            resolve("pasta", "Pasta al pomodoro\nPasta\nPasta e fagioli"),
            vec!["pasta"]
        );
    }

    #[test]
    fn test_fuzzy_single_match() {
        assert_eq!(
            resolve("pollo", "Pollo arrosto\nPolpette\nRiso"),
            vec!["pollo arrosto"]
        );
    }

    #[test]
    fn test_fuzzy_multi_match_keeps_menu_order() {
        assert_eq!(resolve("pa", "Pasta\nPane"), vec!["pasta", "pane"]);
    }

    #[test]
    fn test_no_match() {
        assert!(resolve("sushi", "Pasta\nRiso").is_empty());
    }

    #[test]
    fn test_words_match_in_order_with_gaps() {
        let menu = "Pollo al forno con patate arrosto\nPatate arrosto\nArrosto di pollo";
        assert_eq!(
            resolve("pollo   arrosto", menu),
            vec!["pollo al forno con patate arrosto"]
        );
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        assert_eq!(resolve("  RISO  ", "Pasta\nRiso"), vec!["riso"]);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let menu = "Menu (1) completo\nMenu 1 completo\nInsalata+tonno";
        assert_eq!(resolve("menu (1)", menu), vec!["menu (1) completo"]);
        assert_eq!(resolve("insalata+", menu), vec!["insalata+tonno"]);
        assert!(resolve("p.sta", "Pasta").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(resolve("", "Pasta\nRiso"), vec!["pasta", "riso"]);
    }

    #[test]
    fn test_blank_lines_are_kept_but_unmatched() {
        assert_eq!(resolve("riso", "Pasta\n   \nRiso"), vec!["riso"]);
    }

    #[test]
    fn test_crlf_menu() {
        assert_eq!(resolve("riso", "Pasta\r\nRiso\r\n"), vec!["riso"]);
    }
}
