//! Best-effort Markdown to HTML conversion for the result panel.
//!
//! This is not a parser. It is a fixed sequence of whole-text substitutions,
//! and the output must stay byte-for-byte stable:
//!
//! 1. `### `, `## `, `# ` line prefixes become `<h3>`, `<h2>`, `<h1>`
//! 2. `**x**` becomes `<strong>`, then `*x*` becomes `<em>`
//! 3. `- ` and `<n>. ` line prefixes become `<li>`
//! 4. the first contiguous run of `<li>` lines in the whole text is wrapped
//!    in a single `<ul>`; later runs are left bare
//! 5. every blank-line separator `\n\n` becomes `</p><p>`
//!
//! Nothing is HTML-escaped.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("markdown pattern must compile")
}

// `R` makes `^`/`$` and `.` treat `\r\n` as a line break, like a browser regex.
static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (compile(r"(?mR)^### (.+)$"), "<h3>${1}</h3>"),
        (compile(r"(?mR)^## (.+)$"), "<h2>${1}</h2>"),
        (compile(r"(?mR)^# (.+)$"), "<h1>${1}</h1>"),
        (compile(r"(?R)\*\*(.+?)\*\*"), "<strong>${1}</strong>"),
        (compile(r"(?R)\*(.+?)\*"), "<em>${1}</em>"),
        (compile(r"(?mR)^- (.+)$"), "<li>${1}</li>"),
        (compile(r"(?mR)^[0-9]+\. (.+)$"), "<li>${1}</li>"),
    ]
});

static LIST_RUN: Lazy<Regex> =
    Lazy::new(|| compile(r"(?mR)^<li>.*</li>$(?:\r?\n<li>.*</li>$)*"));

pub fn render_markdown(text: &str) -> String {
    let mut html = text.to_string();
    for (pattern, replacement) in RULES.iter() {
        html = pattern.replace_all(&html, *replacement).into_owned();
    }
    // Only the first run is wrapped.
    html = LIST_RUN.replace(&html, "<ul>${0}</ul>").into_owned();
    html.replace("\n\n", "</p><p>")
}
