//! Common value types used by the person models

use itertools::Itertools;
use std::fmt;
use std::ops::Deref;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Ordered list of course names taught by a person
///
/// Order is preserved and duplicates are kept. The [`Display`](fmt::Display)
/// form is the canonical list rendering used in detail strings, e.g.
/// `['CS101', 'CS202']`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CourseList(Vec<String>);

impl CourseList {
    /// Create an empty course list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Get the courses as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the list and return the underlying vector
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for CourseList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for CourseList {
    fn from(courses: Vec<String>) -> Self {
        Self(courses)
    }
}

impl From<Vec<&str>> for CourseList {
    fn from(courses: Vec<&str>) -> Self {
        courses.into_iter().collect()
    }
}

impl<const N: usize> From<[&str; N]> for CourseList {
    fn from(courses: [&str; N]) -> Self {
        courses.into_iter().collect()
    }
}

impl From<&[&str]> for CourseList {
    fn from(courses: &[&str]) -> Self {
        courses.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for CourseList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a CourseList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CourseList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().map(|c| quote_literal(c)).join(", "))
    }
}

/// Render text as a quoted string literal.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote. Backslashes, the chosen quote and non-printable characters
/// are escaped.
fn quote_literal(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let code = u32::from(c);
                if code <= 0xff {
                    out.push_str(&format!("\\x{code:02x}"));
                } else if code <= 0xffff {
                    out.push_str(&format!("\\u{code:04x}"));
                } else {
                    out.push_str(&format!("\\U{code:08x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Whether a character is written as-is inside a quoted literal.
///
/// Other, separator and unassigned categories are escaped, except the plain
/// ASCII space.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}
