use act_core::entities::Ticket;
use serde::Serialize;
use serde_json::{Value, json};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Ticket columns for table output, in display order.
pub const TICKET_COLUMNS: [&str; 9] = [
    "id",
    "connectDate",
    "partnerId",
    "partnerName",
    "typeOfConnect",
    "discussionArea",
    "discussionSubArea",
    "actionTaken",
    "currentStatus",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?, None),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render tickets, with table columns in [`TICKET_COLUMNS`] order.
pub fn render_tickets(tickets: &[&Ticket], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => render_table(&serde_json::to_value(tickets)?, Some(&TICKET_COLUMNS)),
        _ => render(&tickets, format),
    }
}

pub fn output_tickets(tickets: &[&Ticket], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_tickets(tickets, format)?);
    Ok(())
}

/// Free text, such as a generated report. Tables print it as is; JSON
/// formats wrap it under `key`.
pub fn render_text(key: &str, text: &str, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(text.to_string()),
        _ => render(&json!({ key: text }), format),
    }
}

pub fn output_text(key: &str, text: &str, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_text(key, text, format)?);
    Ok(())
}

/// Informational message for an outcome that is not an error.
pub fn notice(message: &str, format: OutputFormat) -> anyhow::Result<()> {
    output_text("message", message, format)
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value, columns: Option<&[&str]>) -> anyhow::Result<String> {
    let options = table_options();
    match value {
        Value::Array(items) => Ok(render_array_table(items, columns, options)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(value_to_cell(scalar)),
    }
}

fn render_array_table(
    items: &[Value],
    columns: Option<&[&str]>,
    options: table::TableOptions,
) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options);
    }

    // Without a fixed column list, keys appear in first-seen order.
    let headers: Vec<String> = columns.map_or_else(
        || {
            let mut seen = Vec::<String>::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
                if !seen.contains(key) {
                    seen.push(key.clone());
                }
            }
            seen
        },
        |columns| columns.iter().map(ToString::to_string).collect(),
    );

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) if v.is_empty() => String::from("-"),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use act_core::enums::Region;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;
    use crate::test_support;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    fn ticket(id: &str, partner: &str) -> Ticket {
        Ticket {
            partner_name: partner.to_string(),
            ..test_support::ticket(id, Region::Emea)
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Example { id: "x", value: 7 }, OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { id: "x", value: 7 }, OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_table_lists_keys() {
        let out = render(&Example { id: "x", value: 7 }, OutputFormat::Table).unwrap();
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("value"));
    }

    #[test]
    fn ticket_table_uses_fixed_columns_and_dashes_blanks() {
        let first = ticket("1", "Acme");
        let second = ticket("2", "Globex");
        let out = render_tickets(&[&first, &second], OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("id"));
        assert!(lines[0].trim_end().ends_with("currentStatus"));
        assert!(!lines[0].contains("region"));
        assert!(lines[2].contains("Acme"));
        assert!(lines[3].contains("Globex"));
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains(" -  "));
    }

    #[test]
    fn ticket_json_keeps_every_field() {
        let only = ticket("1", "Acme");
        let out = render_tickets(&[&only], OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["region"], "EMEA");
        assert_eq!(parsed[0]["partnerId"], "");
    }

    #[test]
    fn empty_ticket_list_has_placeholder() {
        assert_eq!(render_tickets(&[], OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[test]
    fn text_is_plain_for_tables_and_wrapped_for_json() {
        assert_eq!(render_text("report", "Summary", OutputFormat::Table).unwrap(), "Summary");
        let raw = render_text("report", "Summary", OutputFormat::Raw).unwrap();
        assert_eq!(raw, r#"{"report":"Summary"}"#);
    }
}
