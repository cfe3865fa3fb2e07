//! Rewriting of machine annotations into Simplified Chinese.
//!
//! Titles are translated by plain dictionary lookup. Annotations are
//! rewritten in place: known bootleg-attribution phrases are replaced with
//! their translations, then `set N` becomes `第 N 套`.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::dictionary::Dictionary;
use crate::error::LangError;

/// Stray characters left over from the listing's own encoding round trips.
const FORMATTING_ARTIFACTS: [char; 2] = ['\u{a3}', '\u{a0}'];

/// Gambling-variant marker and its translation.
pub const BET_TAG: &str = "[BET]";
pub const BET_TAG_LOCALIZED: &str = "[博彩]";

const SET_NUMBER_LOCALIZED: &str = "第 ${1} 套";

static SET_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)set\s+(\d+)").expect("set number pattern is valid"));

struct SubstitutionRule {
    key: String,
    pattern: Regex,
    replacement: String,
}

/// Compiled bootleg-phrase substitutions, longest key first.
///
/// Keys that are substrings of longer keys (`bootleg` inside
/// `bootleg of 1942`) must never get the first chance to match.
pub struct BootlegRules {
    rules: Vec<SubstitutionRule>,
}

impl BootlegRules {
    /// Compile one case-insensitive literal matcher per dictionary key.
    /// Keys of equal length keep dictionary order.
    pub fn new(dictionary: &Dictionary) -> Result<Self, LangError> {
        let mut entries: Vec<(&str, &str)> =
            dictionary.iter().filter(|(key, _)| !key.is_empty()).collect();
        entries.sort_by_key(|(key, _)| std::cmp::Reverse(key.chars().count()));

        let rules = entries
            .into_iter()
            .map(|(key, value)| {
                let pattern = RegexBuilder::new(&regex::escape(key))
                    .case_insensitive(true)
                    .build()?;
                Ok(SubstitutionRule {
                    key: key.to_string(),
                    pattern,
                    replacement: value.to_string(),
                })
            })
            .collect::<Result<Vec<_>, LangError>>()?;

        log::debug!("Compiled {} bootleg substitution rules", rules.len());
        Ok(Self { rules })
    }

    /// Keys in the order they are applied.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Localize a raw annotation such as `(bootleg of 1942, set 2) [BET]`.
    pub fn localize(&self, annotation: &str) -> String {
        if annotation.is_empty() {
            return String::new();
        }

        let mut text = strip_artifacts(annotation).replace(BET_TAG, BET_TAG_LOCALIZED);
        for rule in &self.rules {
            if rule.pattern.is_match(&text) {
                text = rule
                    .pattern
                    .replace_all(&text, NoExpand(&rule.replacement))
                    .into_owned();
            }
        }
        SET_NUMBER
            .replace_all(&text, SET_NUMBER_LOCALIZED)
            .into_owned()
    }
}

/// Clean a translated title taken from the title dictionary.
pub fn localize_title(title: &str) -> String {
    strip_artifacts(title)
}

/// Join a localized title and annotation into a display line.
pub fn compose_line(title: &str, annotation: &str) -> String {
    if annotation.is_empty() {
        title.to_string()
    } else {
        format!("{title} {annotation}")
    }
}

fn strip_artifacts(text: &str) -> String {
    text.replace(FORMATTING_ARTIFACTS, "")
}
