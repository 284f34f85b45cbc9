//! Card fragments for each action. Callers escape user-sourced text first.

use super::curriculum::CurriculumEntry;

pub fn lesson_card(escaped_id: &str, entry: &CurriculumEntry) -> String {
    format!(
        r#"<div class="card">
  <h2>{}. {}</h2>
  {}
  <small class="mono">Tip: Use “Quiz me” in the Tutor.</small>
</div>"#,
        escaped_id, entry.title, entry.guide
    )
}

pub fn tutor_card(escaped_reply: &str) -> String {
    format!(
        r#"<div class="card">
  <h2>Tutor</h2>
  <div class="mono">{}</div>
</div>"#,
        escaped_reply
    )
}

pub fn quiz_card(escaped_quiz: &str) -> String {
    format!(
        r#"<div class="card">
  <h2>Quiz</h2>
  <pre class="mono">{}</pre>
</div>"#,
        escaped_quiz
    )
}

/// Titled card showing a pretty-printed record, with an optional footnote.
pub fn record_card(title: &str, escaped_json: &str, footnote: Option<&str>) -> String {
    let footnote = footnote
        .map(|note| format!("\n  <small class=\"mono\">{}</small>", note))
        .unwrap_or_default();
    format!(
        r#"<div class="card">
  <h2>{}</h2>
  <pre class="mono">{}</pre>{}
</div>"#,
        title, escaped_json, footnote
    )
}

pub fn notice_card(title: &str, message: &str) -> String {
    format!(
        r#"<div class="card">
  <h2>{}</h2>
  <p class="mono">{}</p>
</div>"#,
        title, message
    )
}

pub fn noop_card() -> String {
    r#"<div class="card"><h2>OK</h2><p class="mono">No-op.</p></div>"#.to_string()
}

pub fn error_card(escaped_message: &str) -> String {
    format!(
        r#"<div class="card"><h2>Error</h2><p class="mono err">{}</p></div>"#,
        escaped_message
    )
}
