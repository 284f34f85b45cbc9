//! Document shell wrapped around every response fragment.

const HEAD: &str = r#"<!DOCTYPE html><html><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<link rel="preconnect" href="https://fonts.googleapis.com"><link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
<link href="https://fonts.googleapis.com/css2?family=Bitcount+Grid+Single:wght@400;700&family=JetBrains+Mono:wght@400;600;700&display=swap" rel="stylesheet">
<style>
  body{margin:0;font:14px/1.55 system-ui,-apple-system,Segoe UI,Roboto,Arial;background:#fff;color:#0b1220}
  h2,h3{font-family:"Bitcount Grid Single",system-ui;margin:0 0 8px}
  .mono{font-family:"JetBrains Mono",ui-monospace,Menlo,Consolas,monospace}
  .card{border:1px solid #e7edf7;border-radius:12px;padding:12px;margin:8px}
  .ok{color:#19a974;font-weight:700}.err{color:#e04f54;font-weight:700}
  pre{white-space:pre-wrap;border:1px solid #e7edf7;border-radius:10px;padding:10px}
  small{color:#52607a}
</style></head><body>"#;

const TAIL: &str = "</body></html>";

/// Wrap a fragment into a complete document. The fragment is not escaped.
pub fn render(fragment: &str) -> String {
    let mut doc = String::with_capacity(HEAD.len() + fragment.len() + TAIL.len());
    doc.push_str(HEAD);
    doc.push_str(fragment);
    doc.push_str(TAIL);
    doc
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_fragment() {
        let doc = render("<p>hi</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<body><p>hi</p></body>"));
        assert!(doc.ends_with("</html>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x & y")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
