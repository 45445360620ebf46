//! HTML rendering for the web pages
//!
//! All user-supplied text passes through [`escape_html`].

use moodlens_common::db::ResultRecord;
use moodlens_common::time::round2;
use moodlens_common::SentimentResult;

const STYLE: &str = r#"
        body {
            font-family: system-ui, -apple-system, sans-serif;
            max-width: 800px;
            margin: 40px auto;
            padding: 20px;
            line-height: 1.6;
        }
        h1 {
            color: #333;
            border-bottom: 2px solid #0066cc;
            padding-bottom: 10px;
        }
        textarea {
            width: 100%;
            min-height: 120px;
            font-size: 1rem;
        }
        .button {
            display: inline-block;
            padding: 10px 20px;
            background: #0066cc;
            color: white;
            text-decoration: none;
            border: none;
            border-radius: 4px;
            margin: 10px 5px 10px 0;
            cursor: pointer;
        }
        .button:hover {
            background: #0052a3;
        }
        .indicator {
            font-size: 4rem;
        }
        table {
            border-collapse: collapse;
            width: 100%;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 6px 8px;
            text-align: left;
        }
        th {
            background: #f4f4f4;
        }
"#;

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - MoodLens</title>
    <style>{style}</style>
</head>
<body>
{body}
    <p><small>MoodLens v{version}</small></p>
</body>
</html>
"#,
        title = escape_html(title),
        style = STYLE,
        body = body,
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// Entry form
pub fn index_page() -> String {
    page(
        "Analyze",
        r#"    <h1>MoodLens - Text &amp; Emoji Sentiment</h1>
    <form method="post" action="/">
        <label for="text">Say something (emoji welcome):</label>
        <textarea id="text" name="text" placeholder="I love this! 😊👍"></textarea>
        <button type="submit" class="button">Analyze</button>
    </form>
    <p>
        <a href="/history" class="button">History</a>
        <a href="/download" class="button">Download CSV</a>
    </p>
"#,
    )
}

/// Result of one analysis
pub fn result_page(result: &SentimentResult) -> String {
    let body = format!(
        r#"    <h1>Result</h1>
    <div class="indicator">{indicator}</div>
    <h2>{label}</h2>
    <p><strong>Input:</strong> {input}</p>
    <table>
        <tr><th>Text polarity</th><td>{polarity:.2}</td></tr>
        <tr><th>Emoji score</th><td>{emoji:.2}</td></tr>
        <tr><th>Final score</th><td>{final_score:.2}</td></tr>
    </table>
    <p>
        <a href="/" class="button">Analyze another</a>
        <a href="/history" class="button">History</a>
    </p>
"#,
        indicator = result.category.indicator(),
        label = escape_html(&result.label()),
        input = escape_html(&result.input_text),
        polarity = round2(result.text_polarity),
        emoji = round2(result.emoji_polarity),
        final_score = round2(result.final_score),
    );
    page("Result", &body)
}

/// All stored results, in the order given
pub fn history_page(records: &[ResultRecord]) -> String {
    let rows: String = if records.is_empty() {
        "        <tr><td colspan=\"6\">No results yet.</td></tr>\n".to_string()
    } else {
        records
            .iter()
            .map(|record| {
                format!(
                    "        <tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td></tr>\n",
                    escape_html(&record.input_text),
                    escape_html(&record.sentiment),
                    record.polarity,
                    record.emoji_score,
                    record.final_score,
                    escape_html(&record.timestamp),
                )
            })
            .collect()
    };

    let body = format!(
        r#"    <h1>History</h1>
    <table>
        <tr><th>Input</th><th>Sentiment</th><th>Polarity</th><th>Emoji Score</th><th>Final Score</th><th>Timestamp</th></tr>
{rows}    </table>
    <p>
        <a href="/" class="button">Analyze</a>
        <a href="/download" class="button">Download CSV</a>
    </p>
"#,
        rows = rows,
    );
    page("History", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlens_common::Category;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain 😊"), "plain 😊");
    }

    #[test]
    fn test_result_page_escapes_input() {
        let result = SentimentResult {
            input_text: "<script>alert(1)</script> 😊".to_string(),
            text_polarity: 0.0,
            emoji_polarity: 1.0,
            final_score: 0.5,
            category: Category::Positive,
            mood: "Happy",
        };

        let html = result_page(&result);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Positive (Happy)"));
        assert!(html.contains("0.50"));
    }

    #[test]
    fn test_history_page_empty() {
        let html = history_page(&[]);
        assert!(html.contains("No results yet."));
    }
}
