use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate. Scalar fields become a
/// Field/Value table; each nested array of records (e.g. schedule rows)
/// gets its own table below it.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            let scalars: Vec<(&String, &Value)> = map
                .iter()
                .filter(|(_, v)| !is_record_array(v) && !v.is_object())
                .collect();
            if !scalars.is_empty() {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (key, val) in scalars {
                    builder.push_record([key.as_str(), &format_value(val)]);
                }
                println!("{}", Table::from(builder));
            }

            // Nested record objects (e.g. performance output) as their own
            // Field/Value tables
            for (key, val) in map {
                if val.is_object() {
                    println!("\n{}:", key);
                    print_table(val);
                }
            }

            for (key, val) in map {
                if let Value::Array(arr) = val {
                    if is_record_array(val) {
                        println!("\n{}:", key);
                        print_record_array(arr);
                    }
                }
            }
        }
        Value::Array(arr) => print_record_array(arr),
        _ => println!("{}", value),
    }
}

fn is_record_array(value: &Value) -> bool {
    matches!(value, Value::Array(arr) if matches!(arr.first(), Some(Value::Object(_))))
}

fn print_record_array(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Headers from the first record
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
