/// The behavior selected by the `action` query parameter.
///
/// Unknown values are kept in [`Action::Unrecognized`] and answered with a
/// generic acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Lesson,
    Tutor,
    Quiz,
    SaveProfile,
    SaveSnippet,
    ExportProgress,
    ImportProgress,
    ResetProgress,
    Unrecognized(String),
}

impl Action {
    /// Absent or empty selectors mean `tutor`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or_default() {
            "" | "tutor" => Self::Tutor,
            "lesson" => Self::Lesson,
            "quiz" => Self::Quiz,
            "save-profile" => Self::SaveProfile,
            "save-snippet" => Self::SaveSnippet,
            "export-progress" => Self::ExportProgress,
            "import-progress" => Self::ImportProgress,
            "reset-progress" => Self::ResetProgress,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Lesson => "lesson",
            Self::Tutor => "tutor",
            Self::Quiz => "quiz",
            Self::SaveProfile => "save-profile",
            Self::SaveSnippet => "save-snippet",
            Self::ExportProgress => "export-progress",
            Self::ImportProgress => "import-progress",
            Self::ResetProgress => "reset-progress",
            Self::Unrecognized(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tutor() {
        assert_eq!(Action::parse(None), Action::Tutor);
        assert_eq!(Action::parse(Some("")), Action::Tutor);
    }

    #[test]
    fn test_known_actions_round_trip_their_name() {
        for name in [
            "lesson",
            "tutor",
            "quiz",
            "save-profile",
            "save-snippet",
            "export-progress",
            "import-progress",
            "reset-progress",
        ] {
            let action = Action::parse(Some(name));
            assert!(!matches!(action, Action::Unrecognized(_)), "{name} should be known");
            assert_eq!(action.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_action_is_kept() {
        let action = Action::parse(Some("Lesson"));
        assert_eq!(action, Action::Unrecognized("Lesson".to_string()));
        assert_eq!(action.as_str(), "Lesson");
    }
}
