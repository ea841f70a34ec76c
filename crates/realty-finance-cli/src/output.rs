use serde_json::Value;
use std::io;
use tabled::{builder::Builder, Table};

use crate::OutputFormat;

/// Dispatch the computed value to the selected renderer.
pub fn render(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => print_table(value),
        OutputFormat::Csv => print_csv(value),
        OutputFormat::Minimal => print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

fn print_table(value: &Value) {
    let result = result_of(value);

    match result {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                builder.push_record([key.as_str(), &scalar(val)]);
            }
            println!("{}", Table::from(builder));
        }
        Value::Array(rows) => print_rows(rows),
        other => println!("{}", scalar(other)),
    }

    if let Some(envelope) = value.as_object() {
        if let Some(Value::Array(warnings)) = envelope.get("warnings") {
            if !warnings.is_empty() {
                println!("\nWarnings:");
                for w in warnings {
                    if let Value::String(s) = w {
                        println!("  - {}", s);
                    }
                }
            }
        }
        if let Some(Value::String(methodology)) = envelope.get("methodology") {
            println!("\nMethodology: {}", methodology);
        }
    }
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        println!("(empty)");
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            builder.push_record(
                headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(scalar).unwrap_or_default()),
            );
        }
    }
    println!("{}", Table::from(builder));
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match result_of(value) {
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                let _ = wtr.write_record([key.as_str(), &scalar(val)]);
            }
        }
        Value::Array(rows) => {
            if let Some(Value::Object(first)) = rows.first() {
                let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
                let _ = wtr.write_record(&headers);
                for row in rows {
                    if let Value::Object(map) = row {
                        let record: Vec<String> = headers
                            .iter()
                            .map(|h| map.get(*h).map(scalar).unwrap_or_default())
                            .collect();
                        let _ = wtr.write_record(&record);
                    }
                }
            }
        }
        other => {
            let _ = wtr.write_record([&scalar(other)]);
        }
    }

    let _ = wtr.flush();
}

// ---------------------------------------------------------------------------
// Minimal
// ---------------------------------------------------------------------------

/// The single headline figure of each command, in priority order.
const PRIORITY_KEYS: [&str; 4] = [
    "monthly_installment",
    "net_commission",
    "words",
    "closing_balance",
];

fn print_minimal(value: &Value) {
    let result = result_of(value);

    if let Value::Object(map) = result {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    println!("{}", scalar(val));
                    return;
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar(val));
            return;
        }
    }

    println!("{}", scalar(result));
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Unwrap the computation envelope; raw values pass through.
fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
