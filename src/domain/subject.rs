//! The Subject record and the field-level policies applied to incoming data.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// A course-catalog entry: code, name, credits, instructor and term.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Registry-assigned, unique, immutable once assigned.
    pub id: u64,
    pub subject_code: String,
    pub subject_name: String,
    /// `None` serializes as JSON null: the stored form of a credits input
    /// that did not coerce to a number.
    pub credits: Option<i64>,
    pub faculty: String,
    pub semester: String,
}

impl Subject {
    /// Case-insensitive substring match over the three searchable fields.
    /// `semester` and `credits` are not searched. Expects `needle` to be
    /// lowercased already.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.subject_code.to_lowercase().contains(needle)
            || self.subject_name.to_lowercase().contains(needle)
            || self.faculty.to_lowercase().contains(needle)
    }
}

/// Incoming field set for create and update.
///
/// Everything is optional at the wire level: create enforces presence,
/// update takes whatever arrived.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SubjectDraft {
    pub subject_code: Option<String>,
    pub subject_name: Option<String>,
    /// Accepted as a number or a numeric string; coerced on the way in.
    #[schema(value_type = Option<Object>)]
    pub credits: Option<JsonValue>,
    pub faculty: Option<String>,
    pub semester: Option<String>,
}

impl SubjectDraft {
    /// Presence check backing create validation: the four text fields must
    /// be non-empty and `credits` must be truthy. Absent, null, `false`,
    /// numeric zero and the empty string all count as missing, so zero
    /// credits is rejected while the string "0" passes.
    pub fn has_all_fields(&self) -> bool {
        text_present(self.subject_code.as_deref())
            && text_present(self.subject_name.as_deref())
            && credits_present(self.credits.as_ref())
            && text_present(self.faculty.as_deref())
            && text_present(self.semester.as_deref())
    }
}

fn text_present(value: Option<&str>) -> bool {
    value.map(|s| !s.is_empty()).unwrap_or(false)
}

fn credits_present(value: Option<&JsonValue>) -> bool {
    match value {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::Bool(b)) => *b,
        Some(JsonValue::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(JsonValue::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Coerces a credits value to an integer.
///
/// Numbers truncate to their integer part; strings parse as an optional
/// sign followed by leading decimal digits ("3.9" and "3abc" both coerce
/// to 3). Anything else, including unparseable strings, coerces to `None`
/// and is stored that way: the registry does not reject non-numeric
/// credits.
pub fn coerce_credits(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        JsonValue::String(s) => parse_leading_int(s),
        _ => None,
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits
        .parse::<i64>()
        .ok()
        .map(|v| if negative { -v } else { v })
}
