//! Prompt construction for the tutor and quiz actions.

use super::curriculum::CurriculumEntry;

/// Maximum characters of guide text quoted back to the model.
pub const GUIDE_EXCERPT_LIMIT: usize = 400;

const TUTOR_SYSTEM: &str = "You are PyTutor, a concise Python teacher. NO markdown code fences; \
if you give code, prefix with \"Code:\" on a new line and keep it very short.";

/// A system/user prompt pair for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    pub system: String,
    pub user: String,
}

impl ChatExchange {
    /// Answer a learner's question in the context of one lesson.
    ///
    /// `lesson_id` is the identifier the learner asked for, which may differ
    /// from `entry.id` after a fallback.
    pub fn tutor(lesson_id: &str, entry: &CurriculumEntry, question: &str) -> Self {
        let user = format!(
            "Lesson {}: {}\nGuide: {}\nStudent asks: {}\nKeep it short, clear, and actionable.",
            lesson_id,
            entry.title,
            entry.guide_excerpt(GUIDE_EXCERPT_LIMIT),
            question
        );
        Self { system: TUTOR_SYSTEM.to_string(), user }
    }

    /// One four-option multiple-choice question ending in `Answer: X`.
    pub fn quiz(entry: &CurriculumEntry) -> Self {
        Self {
            system: format!(
                "You are PyTutor. Produce ONE MCQ (A–D) about \"{}\". Keep it short. End with \"Answer: X\".",
                entry.title
            ),
            user: format!(
                "Create one MCQ about \"{}\" with options A–D and final line \"Answer: X\".",
                entry.title
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::curriculum::lookup;

    #[test]
    fn test_tutor_exchange_embeds_lesson_and_question() {
        let exchange = ChatExchange::tutor("5", lookup("5"), "why does my loop never end?");
        assert!(exchange.system.contains("PyTutor"));
        assert!(exchange.user.starts_with("Lesson 5: Loops\n"));
        assert!(exchange.user.contains("Guide:  Lesson 5: Loops "));
        assert!(exchange.user.contains("Student asks: why does my loop never end?"));
        assert!(exchange.user.ends_with("Keep it short, clear, and actionable."));
    }

    #[test]
    fn test_tutor_exchange_keeps_requested_id_on_fallback() {
        let exchange = ChatExchange::tutor("42", lookup("42"), "hi");
        assert!(exchange.user.starts_with("Lesson 42: Print & Variables"));
    }

    #[test]
    fn test_quiz_exchange_asks_for_answer_line() {
        let exchange = ChatExchange::quiz(lookup("7"));
        assert!(exchange.system.contains("\"Lists & Tuples\""));
        assert!(exchange.system.ends_with("End with \"Answer: X\"."));
        assert!(exchange.user.contains("options A–D"));
    }
}
