//! Constants used throughout the garnish helpers

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["garnish.json", "garnish.yaml", "garnish.yml"];

/// Suffix stripped by `humanize` (foreign-key columns like `person_id`)
pub const HUMANIZE_ID_SUFFIX: &str = "_id";

/// Characters removed by `parameterize` before slugging
pub const PARAMETERIZE_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '@', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_',
    '`', '~', '(', ')',
];

/// Separator used by `to_param`
pub const PARAM_SEPARATOR: &str = "/";

/// English ordinal suffixes
pub mod ordinal {
    pub const ST: &str = "st";
    pub const ND: &str = "nd";
    pub const RD: &str = "rd";
    pub const TH: &str = "th";
}

/// Default connectors for `to_sentence`
pub mod sentence {
    pub const WORDS_CONNECTOR: &str = ", ";
    pub const TWO_WORDS_CONNECTOR: &str = " and ";
    pub const LAST_WORD_CONNECTOR: &str = " and ";
}

/// Calendar unit sizes
pub mod calendar {
    pub const DAYS_PER_WEEK: i64 = 7;
    pub const MONTHS_PER_YEAR: i64 = 12;
    pub const MONTHS_PER_QUARTER: i64 = 3;
    /// Last nanosecond of a second, used for `end_of_*` boundaries.
    pub const LAST_NANOSECOND: u32 = 999_999_999;
}
