use crate::domain::model::LanguageReport;

/// Column titles of the printed per-language statistics.
pub const REPORT_HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Placeholder for a language where no record yielded a usable salary.
const ABSENT_AVERAGE: &str = "-";

pub fn render(report: &LanguageReport) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(report.rows.len() + 1);
    rows.push(REPORT_HEADERS.iter().map(|header| header.to_string()).collect());
    for row in &report.rows {
        rows.push(vec![
            row.language.clone(),
            row.stat.found.to_string(),
            row.stat.processed.to_string(),
            row.stat
                .average
                .map(|value| value.to_string())
                .unwrap_or_else(|| ABSENT_AVERAGE.to_string()),
        ]);
    }
    render_table(&report.title, &rows)
}

/// ASCII table with the title overlaid on the top border, a separator under
/// the first (header) row and one-space cell padding.
pub fn render_table(title: &str, rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let border = make_border(&widths);
    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(embed_title(&border, title));
    for (index, row) in rows.iter().enumerate() {
        lines.push(format_row(row, &widths));
        if index == 0 {
            lines.push(border.clone());
        }
    }
    lines.push(border);
    lines.join("\n")
}

fn make_border(widths: &[usize]) -> String {
    let mut border = String::from("+");
    for width in widths {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }
    border
}

/// Overlays the title right after the leading `+`, clipping it if the
/// border is too short to hold it whole.
fn embed_title(border: &str, title: &str) -> String {
    if title.is_empty() {
        return border.to_string();
    }
    let border_chars: Vec<char> = border.chars().collect();
    let title_chars: Vec<char> = title.chars().collect();
    let available = border_chars.len().saturating_sub(2);
    let visible = title_chars.len().min(available);

    let mut line = String::from("+");
    line.extend(title_chars.iter().take(visible));
    line.extend(border_chars.iter().skip(1 + visible));
    line
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (index, width) in widths.iter().enumerate() {
        let cell = cells.get(index).map(String::as_str).unwrap_or("");
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding));
        line.push_str(" |");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LanguageRow, LanguageStat};

    #[test]
    fn test_render_table_layout() {
        let rows = vec![
            vec!["Language".to_string(), "Found".to_string()],
            vec!["Go".to_string(), "7".to_string()],
        ];

        let table = render_table("Demo", &rows);

        let expected = concat!(
            "+Demo------+-------+\n",
            "| Language | Found |\n",
            "+----------+-------+\n",
            "| Go       | 7     |\n",
            "+----------+-------+"
        );
        assert_eq!(table, expected);
    }

    #[test]
    fn test_title_is_clipped_to_the_border() {
        let rows = vec![vec!["x".to_string()]];

        let table = render_table("ABCDEFGHIJ", &rows);

        assert_eq!(table.lines().next().unwrap(), "+ABC+");
    }

    #[test]
    fn test_render_report_rows_and_headers() {
        let report = LanguageReport {
            title: "HeadHunter Moscow".to_string(),
            rows: vec![
                LanguageRow {
                    language: "JavaScript".to_string(),
                    stat: LanguageStat {
                        found: 625,
                        processed: 409,
                        average: Some(186_754),
                    },
                },
                LanguageRow {
                    language: "Go".to_string(),
                    stat: LanguageStat {
                        found: 60,
                        processed: 0,
                        average: None,
                    },
                },
            ],
        };

        let table = render(&report);

        assert!(table.starts_with("+HeadHunter Moscow"));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[1],
            "| Language   | Vacancies found | Vacancies processed | Average salary |"
        );
        assert!(lines[3].contains("| JavaScript | 625"));
        assert!(lines[3].contains("| 186754"));

        let go_line = lines.iter().find(|line| line.contains("Go")).unwrap();
        let average_cell = go_line.split('|').nth(4).unwrap().trim();
        assert_eq!(average_cell, ABSENT_AVERAGE);
    }
}
