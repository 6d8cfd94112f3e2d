//! Plain-text tables for `--format table`.

/// Minimum width a column is shrunk to when fitting the terminal.
const MIN_COLUMN_WIDTH: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render aligned rows under `headers`, with a dashed divider.
///
/// Columns are shrunk (widest first) to fit `max_width`; cut cells end in
/// `…`. Status columns are coloured when `color` is set.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = column_widths(headers, rows);
    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }
    let status_column = headers.iter().position(|header| is_status_header(header));

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(value, *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color && status_column == Some(index) {
                    colorize_status(&padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(GAP));
    }
    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect()
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    let floor = |index: usize| headers[index].chars().count().max(MIN_COLUMN_WIDTH);

    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > floor(*index))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    // Multi-line cells (e.g. long actions) are shown on one line.
    let flat = value.replace(['\n', '\r'], " ");
    if flat.chars().count() <= width {
        return flat;
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = flat.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_status_header(header: &str) -> bool {
    matches!(header, "currentStatus" | "status" | "outcome")
}

/// Amber for waiting on the partner, blue for waiting on us, green for done.
fn colorize_status(cell: &str) -> String {
    let code = match cell.trim_end().to_ascii_lowercase().as_str() {
        "resolved" | "created" | "updated" | "deleted" => Some("32"),
        "pending (partner action)" => Some("33"),
        "pending (internal action)" => Some("34"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{cell}\u{1b}[0m"),
        None => cell.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_and_divider_spans_header() {
        let rows = vec![
            vec!["1".to_string(), "Acme".to_string()],
            vec!["200".to_string(), "A much longer partner".to_string()],
        ];
        let table = render_entity_table(&["id", "partnerName"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert!(lines[2].starts_with("     1"));
        assert!(lines[3].contains("A much longer partner"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "1".to_string(),
            "Extremely verbose action taken description".to_string(),
        ]];
        let table = render_entity_table(
            &["id", "actionTaken"],
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 30);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn only_status_column_is_coloured() {
        let rows = vec![vec!["Resolved".to_string(), "Resolved".to_string()]];
        let table = render_entity_table(
            &["actionTaken", "currentStatus"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert_eq!(row.matches("\u{1b}[32m").count(), 1);
        assert!(row.starts_with("Resolved"));
    }

    #[test]
    fn pending_statuses_get_distinct_colours() {
        assert!(colorize_status("Pending (Partner Action)").starts_with("\u{1b}[33m"));
        assert!(colorize_status("Pending (Internal Action)  ").starts_with("\u{1b}[34m"));
        assert_eq!(colorize_status("Email"), "Email");
    }

    #[test]
    fn newlines_are_flattened() {
        assert_eq!(truncate_text("a\nb", 10), "a b");
    }
}
