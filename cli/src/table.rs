use salary_scraper::ResultsMapping;

const HEADER: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Render statistics as an ASCII table with `title` embedded in the top border.
pub fn render_table(title: &str, statistics: &ResultsMapping) -> String {
    let mut rows: Vec<[String; 4]> = vec![HEADER.map(String::from)];
    rows.extend(statistics.iter().map(|(term, statistic)| {
        [
            term.to_owned(),
            statistic.vacancies_found.to_string(),
            statistic.vacancies_processed.to_string(),
            statistic.average_salary.to_string(),
        ]
    }));
    let widths: Vec<usize> = (0..HEADER.len())
        .map(|column| {
            rows.iter()
                .map(|row| row[column].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = border_line(&widths);
    let mut lines = vec![titled_border(&border, title)];
    for (index, row) in rows.iter().enumerate() {
        lines.push(row_line(row, &widths));
        if index == 0 {
            lines.push(border.clone());
        }
    }
    lines.push(border);
    lines.join("\n")
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

// falls back to a plain border when the title doesn't fit
fn titled_border(border: &str, title: &str) -> String {
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > border.chars().count() {
        return border.to_owned();
    }
    let rest: String = border.chars().skip(title_len + 1).collect();
    format!("+{}{}", title, rest)
}

fn row_line(row: &[String], widths: &[usize]) -> String {
    let cells = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("| {} |", cells)
}
