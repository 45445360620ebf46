//! CSV export of stored results
//!
//! One header line, then one comma-joined line per record in store column
//! order. Scores are written in shortest round-trip form with a trailing `.0`
//! for whole numbers. Nothing is quoted, so commas inside the input text shift
//! the fields of that row.

use crate::db::ResultRecord;

/// Header row of the export
pub const CSV_HEADER: &str = "ID,Input,Sentiment,Polarity,Emoji Score,Final Score,Timestamp";

/// Suggested download file name
pub const CSV_FILENAME: &str = "sentiment_data.csv";

/// Render records as CSV text, each line `\n`-terminated
pub fn render_csv(records: &[ResultRecord]) -> String {
    let mut output = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 64);
    output.push_str(CSV_HEADER);
    output.push('\n');

    for record in records {
        output.push_str(&csv_line(record));
        output.push('\n');
    }

    output
}

fn csv_line(record: &ResultRecord) -> String {
    [
        record.id.to_string(),
        record.input_text.clone(),
        record.sentiment.clone(),
        format!("{:?}", record.polarity),
        format!("{:?}", record.emoji_score),
        format!("{:?}", record.final_score),
        record.timestamp.clone(),
    ]
    .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, input: &str) -> ResultRecord {
        ResultRecord {
            id,
            input_text: input.to_string(),
            sentiment: "Positive (Happy)".to_string(),
            polarity: 0.5,
            emoji_score: 0.85,
            final_score: 0.68,
            timestamp: "2024-05-01 12:00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = render_csv(&[]);
        assert_eq!(csv, format!("{}\n", CSV_HEADER));
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_line_and_field_counts() {
        let records = vec![record(1, "great 😊"), record(2, "fine"), record(3, "meh")];
        let csv = render_csv(&records);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), records.len() + 1);
        assert_eq!(lines[0], CSV_HEADER);
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), 7);
        }
    }

    #[test]
    fn test_row_layout() {
        let csv = render_csv(&[record(7, "I love this! 😊👍")]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "7,I love this! 😊👍,Positive (Happy),0.5,0.85,0.68,2024-05-01 12:00:00"
        );
    }

    #[test]
    fn test_whole_number_scores_keep_decimal_point() {
        let mut happy = record(2, "😊");
        happy.polarity = 1.0;
        happy.emoji_score = 1.0;
        happy.final_score = 1.0;
        let mut flat = record(3, "ok");
        flat.sentiment = "Neutral (Neutral)".to_string();
        flat.polarity = 0.0;
        flat.emoji_score = 0.0;
        flat.final_score = 0.0;

        let csv = render_csv(&[happy, flat]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[1], "2,😊,Positive (Happy),1.0,1.0,1.0,2024-05-01 12:00:00");
        assert_eq!(lines[2], "3,ok,Neutral (Neutral),0.0,0.0,0.0,2024-05-01 12:00:00");
    }

    #[test]
    fn test_embedded_comma_is_not_escaped() {
        let csv = render_csv(&[record(1, "yes, really")]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row.split(',').count(), 8);
    }
}
