use serde_json::{json, Value};

use crate::corpus::Corpus;
use crate::study_engine::Entry;

/// Entries as a JSON array of `{"question", "answer"}` objects, in order.
pub fn entries_to_json(entries: &[Entry]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|e| json!({ "question": e.question, "answer": e.answer }))
            .collect(),
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Append one `<table>` of rows, or a placeholder line when there are none.
fn table(html: &mut String, rows: &[Vec<&str>]) {
    html.push_str("    <table>\n");
    if rows.is_empty() {
        html.push_str("      Nothing there.\n");
    }
    for row in rows {
        html.push_str("      <tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("    </table>\n");
}

/// Render a stored corpus as a standalone HTML page with one table for items
/// and one for words.
pub fn corpus_to_html(corpus: &Corpus) -> String {
    let items: Vec<Vec<&str>> = corpus
        .items
        .iter()
        .map(|it| vec![it.prompt_text.as_str(), it.answer_text.as_str(), it.characters.as_str()])
        .collect();
    let words: Vec<Vec<&str>> = corpus
        .words
        .iter()
        .map(|w| {
            vec![
                w.prompt_form.as_str(),
                w.answer_form.as_str(),
                w.part_of_speech.as_str(),
                w.characters.as_str(),
            ]
        })
        .collect();

    let mut html = String::from("<html>\n  <body>\n");
    html.push_str(&format!("    <h1>{}</h1>\n", escape_html(&corpus.name)));
    html.push_str("    <h2>Items</h2>\n");
    table(&mut html, &items);
    html.push_str("    <h2>Words</h2>\n");
    table(&mut html, &words);
    html.push_str("  </body>\n</html>\n");
    html
}
