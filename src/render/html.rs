// src/render/html.rs
//! Minimal HTML writer used by the resume layouts

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[derive(Debug, Default)]
pub struct Html {
    buf: String,
    depth: usize,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }

    pub fn open(&mut self, tag: &str, class: &str) -> &mut Self {
        self.indent();
        if class.is_empty() {
            self.buf.push_str(&format!("<{}>\n", tag));
        } else {
            self.buf.push_str(&format!("<{} class=\"{}\">\n", tag, class));
        }
        self.depth += 1;
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.buf.push_str(&format!("</{}>\n", tag));
        self
    }

    /// One element on one line with escaped text content
    pub fn element(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        self.indent();
        let text = escape_html(text);
        if class.is_empty() {
            self.buf.push_str(&format!("<{tag}>{text}</{tag}>\n"));
        } else {
            self.buf
                .push_str(&format!("<{tag} class=\"{class}\">{text}</{tag}>\n"));
        }
        self
    }

    /// Element whose text parts are joined with `<br />`
    pub fn element_lines(&mut self, tag: &str, class: &str, lines: &[&str]) -> &mut Self {
        self.indent();
        let joined = lines
            .iter()
            .map(|l| escape_html(l))
            .collect::<Vec<_>>()
            .join("<br />");
        self.buf
            .push_str(&format!("<{tag} class=\"{class}\">{joined}</{tag}>\n"));
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Wrap a rendered fragment in a standalone page for export
pub fn standalone_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        PAGE_STYLE,
        body
    )
}

const PAGE_STYLE: &str = "body { font-family: sans-serif; margin: 0; color: #1f2937; }
.resume { background: #fff; max-width: 850px; margin: 0 auto; padding: 2.5rem; }
.resume.modern { display: flex; padding: 0; }
.modern .sidebar { background: #f3f4f6; width: 33%; padding: 1.5rem; }
.modern .main { width: 67%; padding: 1.5rem; }
h2 { font-size: 1.1rem; border-bottom: 1px solid #e5e7eb; }
.modern h2 { text-transform: uppercase; letter-spacing: 0.05em; border: none; }
.entry-header { display: flex; justify-content: space-between; }
.date-range, .subtitle, .contact { color: #4b5563; font-size: 0.9rem; }
.tag { background: #e5e7eb; padding: 0 0.4rem; margin-right: 0.25rem; border-radius: 4px; }
.empty { font-style: italic; color: #6b7280; }
";
