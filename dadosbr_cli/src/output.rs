use anyhow::{anyhow, Result};
use dadosbr_api::Payload;
use serde_json::Value;
use tabled::builder::Builder;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Raw,
}

/// Prints one response. Text bodies (CSV, XML, Atom) always go out verbatim.
pub fn print_payload(payload: &Payload, format: &OutputFormat) -> Result<()> {
    match payload {
        Payload::Text(text) => print_text(text),
        Payload::Json(value) => match format {
            OutputFormat::Table => println!("{}", render_table(value)),
            OutputFormat::Json => print_json(value),
            OutputFormat::Csv => print!("{}", render_csv(value)?),
            OutputFormat::Raw => println!("{}", value),
        },
    }
    Ok(())
}

fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Row builders --

/// Headers and rows of a JSON document.
///
/// OData envelopes are unwrapped to their `value` array. Columns are the union
/// of object keys in first-seen order; scalars land in a `value` column.
fn build_rows(value: &Value) -> (Vec<String>, Vec<Vec<String>>) {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => match map.get("value") {
            Some(Value::Array(items)) => items.iter().collect(),
            _ => vec![value],
        },
        other => vec![other],
    };

    let mut headers: Vec<String> = Vec::new();
    for item in &items {
        match item {
            Value::Object(map) => {
                for key in map.keys() {
                    if !headers.iter().any(|h| h == key) {
                        headers.push(key.clone());
                    }
                }
            }
            _ => {
                if !headers.iter().any(|h| h == "value") {
                    headers.push("value".to_string());
                }
            }
        }
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| match item {
                    Value::Object(map) => map.get(header).map(cell).unwrap_or_default(),
                    other if header == "value" => cell(other),
                    _ => String::new(),
                })
                .collect()
        })
        .collect();

    (headers, rows)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// -- Table output --

fn render_table(value: &Value) -> String {
    let (headers, rows) = build_rows(value);
    let mut builder = Builder::default();
    builder.push_record(headers);
    for row in rows {
        builder.push_record(row);
    }
    builder.build().to_string()
}

// -- CSV output --

fn render_csv(value: &Value) -> Result<String> {
    let (headers, rows) = build_rows(value);
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&headers)?;
    for row in rows {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| anyhow!("{}", e))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_rows_union_of_keys() {
        let value = json!([
            {"data": "01/01/2023", "valor": "1.12"},
            {"data": "01/02/2023", "extra": null, "valor": "0.92"}
        ]);
        let (headers, rows) = build_rows(&value);
        assert_eq!(headers, vec!["data", "valor", "extra"]);
        assert_eq!(rows[0], vec!["01/01/2023", "1.12", ""]);
        assert_eq!(rows[1], vec!["01/02/2023", "0.92", ""]);
    }

    #[test]
    fn test_build_rows_unwraps_odata_envelope() {
        let value = json!({
            "@odata.context": "https://example.com/$metadata",
            "value": [{"Indicador": "Selic", "Mediana": 10.75}]
        });
        let (headers, rows) = build_rows(&value);
        assert_eq!(headers, vec!["Indicador", "Mediana"]);
        assert_eq!(rows, vec![vec!["Selic".to_string(), "10.75".to_string()]]);
    }

    #[test]
    fn test_build_rows_single_object_is_one_row() {
        let value = json!({"total": 81, "cargo": {"nome": "SENADOR"}});
        let (headers, rows) = build_rows(&value);
        assert_eq!(headers.len(), 2);
        assert_eq!(rows.len(), 1);
        let cargo = headers.iter().position(|h| h == "cargo").unwrap();
        assert_eq!(rows[0][cargo], r#"{"nome":"SENADOR"}"#);
    }

    #[test]
    fn test_build_rows_scalars() {
        let (headers, rows) = build_rows(&json!([1, "two"]));
        assert_eq!(headers, vec!["value"]);
        assert_eq!(rows, vec![vec!["1".to_string()], vec!["two".to_string()]]);
    }

    #[test]
    fn test_build_rows_empty_array() {
        let (headers, rows) = build_rows(&json!([]));
        assert!(headers.is_empty());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_csv_headers_and_quoting() {
        let value = json!([{"nome": "EMPRESA, LTDA", "id": 4521}]);
        let csv = render_csv(&value).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,nome"));
        assert_eq!(lines.next(), Some("4521,\"EMPRESA, LTDA\""));
    }

    #[test]
    fn test_table_contains_headers_and_cells() {
        let value = json!([{"sequencial": 101, "nome": "MARIA DA SILVA"}]);
        let table = render_table(&value);
        assert!(table.contains("sequencial"));
        assert!(table.contains("MARIA DA SILVA"));
        assert!(table.contains("101"));
    }
}
