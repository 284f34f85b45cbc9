//! Typed field schemas, one per action.
//!
//! Defaults and truncation are applied here, once, so action code never sees
//! a missing or oversized field.

use serde::Serialize;

use super::form::FormFields;
use crate::content::curriculum::FALLBACK_LESSON_ID;

pub const USER_TEXT_LIMIT: usize = 4000;
pub const CODE_LIMIT: usize = 10_000;

/// Build a schema from decoded form fields.
pub trait FieldSchema: Sized {
    fn from_form(form: &FormFields) -> Self;
}

fn truncate_chars(value: &str, limit: usize) -> String {
    value.chars().take(limit).collect()
}

fn text(form: &FormFields, name: &str) -> String {
    form.get(name).unwrap_or_default().to_string()
}

fn lesson_id(form: &FormFields) -> String {
    form.get_or("lesson_id", FALLBACK_LESSON_ID).to_string()
}

/// Fields for `lesson` and `quiz`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonFields {
    pub lesson_id: String,
}

impl FieldSchema for LessonFields {
    fn from_form(form: &FormFields) -> Self {
        Self { lesson_id: lesson_id(form) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorFields {
    pub lesson_id: String,
    /// Learner question, at most [`USER_TEXT_LIMIT`] chars
    pub user_text: String,
}

impl FieldSchema for TutorFields {
    fn from_form(form: &FormFields) -> Self {
        Self {
            lesson_id: lesson_id(form),
            user_text: truncate_chars(form.get("user_text").unwrap_or_default(), USER_TEXT_LIMIT),
        }
    }
}

/// Learner profile as submitted; every field defaults to "".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileFields {
    pub name: String,
    pub level: String,
    pub goal: String,
    pub pace: String,
    pub focus: String,
    pub consent: String,
}

impl FieldSchema for ProfileFields {
    fn from_form(form: &FormFields) -> Self {
        Self {
            name: text(form, "name"),
            level: text(form, "level"),
            goal: text(form, "goal"),
            pace: text(form, "pace"),
            focus: text(form, "focus"),
            consent: text(form, "consent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetFields {
    /// Source text, at most [`CODE_LIMIT`] chars
    pub code: String,
}

impl FieldSchema for SnippetFields {
    fn from_form(form: &FormFields) -> Self {
        Self { code: truncate_chars(form.get("code").unwrap_or_default(), CODE_LIMIT) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::Fields(
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_lesson_id_defaults_when_missing_or_empty() {
        assert_eq!(LessonFields::from_form(&form(&[])).lesson_id, FALLBACK_LESSON_ID);
        assert_eq!(LessonFields::from_form(&form(&[("lesson_id", "")])).lesson_id, "1");
        assert_eq!(LessonFields::from_form(&form(&[("lesson_id", "9")])).lesson_id, "9");
    }

    #[test]
    fn test_user_text_truncated_by_chars() {
        let long = "é".repeat(USER_TEXT_LIMIT + 50);
        let fields = TutorFields::from_form(&form(&[("user_text", long.as_str())]));
        assert_eq!(fields.user_text.chars().count(), USER_TEXT_LIMIT);
        assert_eq!(fields.lesson_id, "1");
    }

    #[test]
    fn test_code_truncated() {
        let long = "x".repeat(CODE_LIMIT + 1);
        assert_eq!(SnippetFields::from_form(&form(&[("code", long.as_str())])).code.len(), CODE_LIMIT);
        assert_eq!(SnippetFields::from_form(&FormFields::default()).code, "");
    }

    #[test]
    fn test_profile_defaults_to_empty_strings() {
        let profile = ProfileFields::from_form(&form(&[("name", "Ada"), ("level", "beginner")]));
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.level, "beginner");
        assert_eq!(profile.goal, "");
        assert_eq!(profile.consent, "");
    }

    #[test]
    fn test_raw_body_yields_defaults() {
        let raw = FormFields::Raw(crate::widget::RawBody {
            is_raw: true,
            byte_length: 10,
            note: crate::widget::form::MULTIPART_NOTE,
        });
        assert_eq!(TutorFields::from_form(&raw).lesson_id, "1");
        assert_eq!(ProfileFields::from_form(&raw).name, "");
    }
}
