//! Extension trait for string slices.
//!
//! The inflection helpers delegate to `cruet`, which implements the ActiveSupport rules.

use crate::constants::{HUMANIZE_ID_SUFFIX, PARAMETERIZE_PUNCTUATION};
use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        snake::to_snake_case, table::to_table_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
    suffix::foreign_key::to_foreign_key,
};
use log::warn;
use regex::Regex;
use std::sync::OnceLock;

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            warn!("Invalid regex '{pattern}': {err}");
            None
        }
    }
}

fn leading_integer() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(r"^\s*[+-]?[0-9]+")).as_ref()
}

fn leading_float() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(r"^\s*[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?"))
        .as_ref()
}

fn whitespace_run() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(r"\s+")).as_ref()
}

fn map_first_char(s: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => f(first) + chars.as_str(),
        None => String::new(),
    }
}

/// Extension trait for `str`.
///
/// Every method returns a new value; `chars`, `starts_with`, `ends_with`, `is_empty`,
/// `to_lowercase` and `to_uppercase` are the inherent `str` methods.
pub trait StrExt {
    /// Characters in reverse order.
    fn reverse(&self) -> String;
    /// Number of characters (not bytes).
    fn size(&self) -> usize;
    fn first(&self) -> Option<char>;
    fn last(&self) -> Option<char>;
    /// The first `n` characters.
    fn first_n(&self, n: usize) -> String;
    /// The last `n` characters.
    fn last_n(&self, n: usize) -> String;

    /// Parses the leading integer after optional whitespace and sign.
    ///
    /// Trailing garbage is ignored and input without a numeric prefix yields `0`. Values outside
    /// the `i64` range saturate.
    ///
    /// # Examples
    /// ```
    /// use garnish::ext::StrExt;
    ///
    /// assert_eq!("  42px".to_i(), 42);
    /// assert_eq!("-7 apples".to_i(), -7);
    /// assert_eq!("abc".to_i(), 0);
    /// ```
    fn to_i(&self) -> i64;
    /// Parses the leading decimal number, `0.0` when there is none.
    fn to_f(&self) -> f64;

    /// Collapses whitespace runs to one space and trims both ends.
    fn squish(&self) -> String;
    /// Empty or whitespace only.
    fn is_blank(&self) -> bool;
    /// `"author_id"` -> `"Author"`, `"employee_salary"` -> `"Employee salary"`.
    fn humanize(&self) -> String;
    /// Humanizes, then upcases the first character of every space separated word.
    fn titleize(&self) -> String;
    fn titlecase(&self) -> String;
    /// URL slug: `"  Hello, World!  "` -> `"hello-world"`.
    fn parameterize(&self) -> String;
    /// Non-overlapping occurrences of `needle`; an empty needle counts zero.
    fn count(&self, needle: &str) -> usize;
    fn upcase_first(&self) -> String;
    fn downcase_first(&self) -> String;

    fn pluralize(&self) -> String;
    fn singularize(&self) -> String;
    /// `"active_model"` -> `"ActiveModel"`.
    fn camelize(&self) -> String;
    /// `"active_model"` -> `"activeModel"`.
    fn camelize_lower(&self) -> String;
    fn underscore(&self) -> String;
    fn dasherize(&self) -> String;
    /// Pluralized snake case table name, `"RawScaledScorer"` -> `"raw_scaled_scorers"`.
    fn tableize(&self) -> String;
    /// `"Message"` -> `"message_id"`.
    fn foreign_key(&self) -> String;
}

impl StrExt for str {
    fn reverse(&self) -> String {
        self.chars().rev().collect()
    }

    fn size(&self) -> usize {
        self.chars().count()
    }

    fn first(&self) -> Option<char> {
        self.chars().next()
    }

    fn last(&self) -> Option<char> {
        self.chars().next_back()
    }

    fn first_n(&self, n: usize) -> String {
        self.chars().take(n).collect()
    }

    fn last_n(&self, n: usize) -> String {
        let skip = self.size().saturating_sub(n);
        self.chars().skip(skip).collect()
    }

    fn to_i(&self) -> i64 {
        let Some(m) = leading_integer().and_then(|re| re.find(self)) else {
            return 0;
        };
        let digits = m.as_str().trim_start();
        digits.parse::<i64>().unwrap_or_else(|_| {
            warn!("'{digits}' does not fit in i64, saturating");
            if digits.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        })
    }

    fn to_f(&self) -> f64 {
        leading_float()
            .and_then(|re| re.find(self))
            .and_then(|m| m.as_str().trim_start().parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    fn squish(&self) -> String {
        self.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn humanize(&self) -> String {
        self.strip_suffix(HUMANIZE_ID_SUFFIX)
            .unwrap_or(self)
            .replace('_', " ")
            .upcase_first()
    }

    fn titleize(&self) -> String {
        self.humanize()
            .split(' ')
            .map(|word| word.upcase_first())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn titlecase(&self) -> String {
        self.titleize()
    }

    fn parameterize(&self) -> String {
        let stripped: String = self
            .trim()
            .chars()
            .filter(|c| !PARAMETERIZE_PUNCTUATION.contains(c))
            .collect::<String>()
            .to_lowercase();
        match whitespace_run() {
            Some(re) => re.replace_all(&stripped, "-").into_owned(),
            None => stripped.split_whitespace().collect::<Vec<_>>().join("-"),
        }
    }

    fn count(&self, needle: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        self.matches(needle).count()
    }

    fn upcase_first(&self) -> String {
        map_first_char(self, |c| c.to_uppercase().collect())
    }

    fn downcase_first(&self) -> String {
        map_first_char(self, |c| c.to_lowercase().collect())
    }

    fn pluralize(&self) -> String {
        to_plural(self)
    }

    fn singularize(&self) -> String {
        to_singular(self)
    }

    fn camelize(&self) -> String {
        to_pascal_case(self)
    }

    fn camelize_lower(&self) -> String {
        to_camel_case(self)
    }

    fn underscore(&self) -> String {
        to_snake_case(self)
    }

    fn dasherize(&self) -> String {
        to_kebab_case(self)
    }

    fn tableize(&self) -> String {
        to_table_case(self)
    }

    fn foreign_key(&self) -> String {
        to_foreign_key(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_accessors_are_unicode_aware() {
        let s = "héllo";
        assert_eq!(s.size(), 5);
        assert_eq!(s.reverse(), "olléh");
        assert_eq!(StrExt::first(s), Some('h'));
        assert_eq!(StrExt::last(s), Some('o'));
        assert_eq!(s.first_n(2), "hé");
        assert_eq!(s.last_n(3), "llo");
        assert_eq!(s.last_n(10), "héllo");
        assert_eq!(s.first_n(0), "");
        assert_eq!(StrExt::first(""), None);
    }

    #[test]
    fn test_to_i() {
        assert_eq!("42".to_i(), 42);
        assert_eq!("  +12abc".to_i(), 12);
        assert_eq!("-3.9".to_i(), -3);
        assert_eq!("".to_i(), 0);
        assert_eq!("x1".to_i(), 0);
        assert_eq!("99999999999999999999".to_i(), i64::MAX);
        assert_eq!("-99999999999999999999".to_i(), i64::MIN);
    }

    #[test]
    fn test_to_f() {
        assert_eq!("3.25kg".to_f(), 3.25);
        assert_eq!(" .5".to_f(), 0.5);
        assert_eq!("-1e3x".to_f(), -1000.0);
        assert_eq!("7.".to_f(), 7.0);
        assert_eq!("e5".to_f(), 0.0);
    }

    #[test]
    fn test_numeric_prefix_is_ascii_only() {
        assert_eq!("\u{663}".to_i(), 0);
        assert_eq!("1\u{663}".to_i(), 1);
        assert_eq!("-12\u{663}4".to_i(), -12);
        assert_eq!("\u{663}".to_f(), 0.0);
        assert_eq!("1\u{663}".to_f(), 1.0);
        assert_eq!("2.5\u{663}".to_f(), 2.5);
    }

    #[test]
    fn test_squish_and_blank() {
        assert_eq!("  a \n\t b   c ".squish(), "a b c");
        assert!("  \n".is_blank());
        assert!("".is_blank());
        assert!(!" a ".is_blank());
    }

    #[test]
    fn test_humanize_and_titleize() {
        assert_eq!("person_id".humanize(), "Person");
        assert_eq!("employee_salary".humanize(), "Employee salary");
        assert_eq!("id_id".humanize(), "Id");
        assert_eq!("man_from_the_boondocks".titleize(), "Man From The Boondocks");
        assert_eq!("x-men: the last stand".titlecase(), "X-men: The Last Stand");
    }

    #[test]
    fn test_parameterize() {
        assert_eq!("  Hello, World!  ".parameterize(), "hello-world");
        assert_eq!("Donald E. Knuth".parameterize(), "donald-e-knuth");
        assert_eq!("snake_case (v2)".parameterize(), "snakecase-v2");
    }

    #[test]
    fn test_count() {
        assert_eq!("banana".count("an"), 2);
        assert_eq!("aaaa".count("aa"), 2);
        assert_eq!("abc".count(""), 0);
    }

    #[test]
    fn test_first_char_case() {
        assert_eq!("hello world".upcase_first(), "Hello world");
        assert_eq!("Hello".downcase_first(), "hello");
        assert_eq!("".upcase_first(), "");
    }

    #[test]
    fn test_inflections() {
        assert_eq!("post".pluralize(), "posts");
        assert_eq!("posts".singularize(), "post");
        assert_eq!("active_model".camelize(), "ActiveModel");
        assert_eq!("active_model".camelize_lower(), "activeModel");
        assert_eq!("ActiveModel".underscore(), "active_model");
        assert_eq!("puni_puni".dasherize(), "puni-puni");
        assert_eq!("RawScaledScorer".tableize(), "raw_scaled_scorers");
        assert_eq!("Message".foreign_key(), "message_id");
    }
}
