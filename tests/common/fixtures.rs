//! Page and record fixtures

use serde_json::{Value, json};

/// A record in the shape the list-records endpoint returns
pub fn api_record(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "createdTime": "2024-03-15T09:30:00.000Z",
        "fields": {
            "Name": name,
            "Category": ["Tooling", "Infra"],
            "Stars": 42
        }
    })
}

/// A page of records, with a continuation token when `offset` is given
pub fn api_page(records: &[(&str, &str)], offset: Option<&str>) -> Value {
    let records: Vec<Value> = records
        .iter()
        .map(|(id, name)| api_record(id, name))
        .collect();
    match offset {
        Some(offset) => json!({ "records": records, "offset": offset }),
        None => json!({ "records": records }),
    }
}
