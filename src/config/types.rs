//! Basic types and enums for configuration

use crate::constants::sentence;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Which day begins a week for `beginning_of_week` and `all_week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// ISO 8601 weeks.
    #[default]
    Monday,
    /// US/Canada weeks.
    Sunday,
}

impl WeekStart {
    /// How many days `weekday` lies after the start of its week.
    pub fn days_from_start(self, weekday: Weekday) -> i64 {
        match self {
            WeekStart::Monday => weekday.num_days_from_monday() as i64,
            WeekStart::Sunday => weekday.num_days_from_sunday() as i64,
        }
    }
}

impl Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WeekStart::Monday => "monday",
            WeekStart::Sunday => "sunday",
        };
        write!(f, "{s}")
    }
}

/// Connectors used when joining a list into an English sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceConnectors {
    /// Placed between all but the last two items
    #[serde(default = "get_default_words_connector")]
    pub words_connector: String,
    /// Used instead of the others when there are exactly two items
    #[serde(default = "get_default_two_words_connector")]
    pub two_words_connector: String,
    /// Placed before the last item of three or more
    #[serde(default = "get_default_last_word_connector")]
    pub last_word_connector: String,
}

impl Default for SentenceConnectors {
    fn default() -> Self {
        Self {
            words_connector: get_default_words_connector(),
            two_words_connector: get_default_two_words_connector(),
            last_word_connector: get_default_last_word_connector(),
        }
    }
}

fn get_default_words_connector() -> String {
    sentence::WORDS_CONNECTOR.to_string()
}

fn get_default_two_words_connector() -> String {
    sentence::TWO_WORDS_CONNECTOR.to_string()
}

fn get_default_last_word_connector() -> String {
    sentence::LAST_WORD_CONNECTOR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_connectors() {
        let connectors = SentenceConnectors::default();
        assert_eq!(connectors.words_connector, ", ");
        assert_eq!(connectors.two_words_connector, " and ");
        assert_eq!(connectors.last_word_connector, " and ");
    }

    #[test]
    fn test_week_start_offsets() {
        assert_eq!(WeekStart::Monday.days_from_start(Weekday::Mon), 0);
        assert_eq!(WeekStart::Monday.days_from_start(Weekday::Sun), 6);
        assert_eq!(WeekStart::Sunday.days_from_start(Weekday::Sun), 0);
        assert_eq!(WeekStart::Sunday.days_from_start(Weekday::Sat), 6);
    }

    #[test]
    fn test_week_start_display() {
        assert_eq!(WeekStart::Monday.to_string(), "monday");
        assert_eq!(WeekStart::Sunday.to_string(), "sunday");
    }
}
