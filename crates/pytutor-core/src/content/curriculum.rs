//! Curriculum registry.
//!
//! Guide markup is authored here and inserted into documents verbatim.

use regex::Regex;
use std::sync::OnceLock;

/// Lesson served when none is requested or the requested one does not exist.
pub const FALLBACK_LESSON_ID: &str = "1";

#[derive(Debug, PartialEq, Eq)]
pub struct CurriculumEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub guide: &'static str,
}

pub static CURRICULUM: [CurriculumEntry; 13] = [
    CurriculumEntry {
        id: "1",
        title: "Print & Variables",
        guide: r#"<h2>Lesson 1: print() and Variables</h2>
<p><strong>print()</strong> sends text/values to output. <strong>Variable</strong> = named box storing a value.</p>
<pre class="mono">name="Ada"; age=20
print("Hello", name, "you are", age)</pre>"#,
    },
    CurriculumEntry {
        id: "2",
        title: "Data Types",
        guide: "<h2>Lesson 2: Data Types</h2><p>int, float, str, bool · convert with int()/float()/str() · check with type(x).</p>",
    },
    CurriculumEntry {
        id: "3",
        title: "Operators",
        guide: "<h2>Lesson 3: Operators</h2><p>+ - * / // % ** · == != &lt; &gt; &lt;= &gt;=</p>",
    },
    CurriculumEntry {
        id: "4",
        title: "If / Else",
        guide: "<h2>Lesson 4: If / Else</h2><p>if / elif / else · truthiness.</p>",
    },
    CurriculumEntry {
        id: "5",
        title: "Loops",
        guide: "<h2>Lesson 5: Loops</h2><p>for / while · break / continue.</p>",
    },
    CurriculumEntry {
        id: "6",
        title: "Functions",
        guide: "<h2>Lesson 6: Functions</h2><p>def, params, return. Small & testable.</p>",
    },
    CurriculumEntry {
        id: "7",
        title: "Lists & Tuples",
        guide: "<h2>Lesson 7: Lists & Tuples</h2><p>Lists mutable; tuples immutable.</p>",
    },
    CurriculumEntry {
        id: "8",
        title: "Dictionaries & Sets",
        guide: "<h2>Lesson 8: Dictionaries & Sets</h2><p>Key→value; sets store uniques.</p>",
    },
    CurriculumEntry {
        id: "9",
        title: "File Handling",
        guide: "<h2>Lesson 9: File Handling</h2><p>open + context manager (with).</p>",
    },
    CurriculumEntry {
        id: "10",
        title: "Classes & OOP",
        guide: "<h2>Lesson 10: Classes & OOP</h2><p>Class blueprint; objects instances.</p>",
    },
    CurriculumEntry {
        id: "11",
        title: "Modules & Packages",
        guide: "<h2>Lesson 11: Modules & Packages</h2><p>import / from x import y.</p>",
    },
    CurriculumEntry {
        id: "12",
        title: "Error Handling",
        guide: "<h2>Lesson 12: Error Handling</h2><p>try / except / else / finally.</p>",
    },
    CurriculumEntry {
        id: "13",
        title: "Final Project",
        guide: "<h2>Lesson 13: Final Project</h2><p>Plan → build → iterate.</p>",
    },
];

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]+>").expect("Tag regex is valid"))
}

/// Look up a lesson by identifier, falling back to lesson "1".
///
/// Matching is exact: "01" or " 2" are unknown identifiers.
pub fn lookup(id: &str) -> &'static CurriculumEntry {
    CURRICULUM.iter().find(|entry| entry.id == id).unwrap_or_else(fallback)
}

fn fallback() -> &'static CurriculumEntry {
    CURRICULUM
        .iter()
        .find(|entry| entry.id == FALLBACK_LESSON_ID)
        .unwrap_or(&CURRICULUM[0])
}

impl CurriculumEntry {
    /// Guide text with every tag replaced by a space, capped at `limit` chars.
    pub fn guide_excerpt(&self, limit: usize) -> String {
        tag_regex().replace_all(self.guide, " ").chars().take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_ids() {
        assert_eq!(lookup("2").title, "Data Types");
        assert_eq!(lookup("13").title, "Final Project");
    }

    #[test]
    fn test_lookup_falls_back_to_first_lesson() {
        assert_eq!(lookup("99").title, "Print & Variables");
        assert_eq!(lookup("").id, FALLBACK_LESSON_ID);
        assert_eq!(lookup("01").id, FALLBACK_LESSON_ID);
    }

    #[test]
    fn test_ids_are_sequential() {
        for (idx, entry) in CURRICULUM.iter().enumerate() {
            assert_eq!(entry.id, (idx + 1).to_string());
        }
    }

    #[test]
    fn test_guide_excerpt_strips_tags() {
        let excerpt = lookup("4").guide_excerpt(400);
        assert!(!excerpt.contains('<'));
        assert!(excerpt.contains("Lesson 4: If / Else"));
        assert!(excerpt.contains("truthiness."));
    }

    #[test]
    fn test_guide_excerpt_respects_limit() {
        assert_eq!(lookup("1").guide_excerpt(10).chars().count(), 10);
        assert!(lookup("1").guide_excerpt(400).chars().count() <= 400);
    }
}
