//! Splitting of machine descriptions into a base title and annotation.
//!
//! MAME descriptions follow a loose convention where everything from the
//! first parenthesis or bracket onward qualifies the title:
//! ```text
//! Street Fighter II: The World Warrior (World 910522) [bootleg, set 2]
//! ```
//! Only the first delimiter matters. Nested or repeated groups stay part of
//! the annotation verbatim.

/// Characters that open an annotation.
const ANNOTATION_OPENERS: [char; 2] = ['(', '['];

/// Characters that separate annotation tokens.
const TOKEN_DELIMITERS: [char; 5] = ['(', ')', '[', ']', ','];

/// A description split at its first `(` or `[`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitTitle<'a> {
    /// Text before the delimiter, untrimmed.
    pub title: &'a str,
    annotation: Option<&'a str>,
}

impl<'a> SplitTitle<'a> {
    /// The annotation including its opening delimiter, or `""` if none.
    pub fn annotation(&self) -> &'a str {
        self.annotation.unwrap_or("")
    }

    pub fn has_annotation(&self) -> bool {
        self.annotation.is_some()
    }

    /// The delimiter the annotation opens with.
    pub fn delimiter(&self) -> Option<char> {
        self.annotation.and_then(|a| a.chars().next())
    }

    /// The split as a one-element (`[description]`) or three-element
    /// (`[title, delimiter, rest]`) sequence.
    pub fn parts(&self) -> Vec<&'a str> {
        match self.annotation {
            Some(annotation) => {
                let (open, rest) = annotation.split_at(1);
                vec![self.title, open, rest]
            }
            None => vec![self.title],
        }
    }
}

/// Split a description at the first `(` or `[`.
///
/// # Examples
///
/// ```
/// use mame_lang_core::title::split_title;
///
/// let split = split_title("1942 (Revision B)");
/// assert_eq!(split.title.trim(), "1942");
/// assert_eq!(split.annotation(), "(Revision B)");
///
/// let split = split_title("Pac-Man");
/// assert_eq!(split.parts(), vec!["Pac-Man"]);
/// ```
pub fn split_title(description: &str) -> SplitTitle<'_> {
    match description.find(ANNOTATION_OPENERS) {
        Some(pos) => SplitTitle {
            title: &description[..pos],
            annotation: Some(&description[pos..]),
        },
        None => SplitTitle {
            title: description,
            annotation: None,
        },
    }
}

/// Break an annotation into its comma, bracket, and parenthesis separated
/// fragments. Empty fragments are dropped; the rest are kept untrimmed.
pub fn tokenize_annotation(annotation: &str) -> Vec<String> {
    annotation
        .split(TOKEN_DELIMITERS)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
