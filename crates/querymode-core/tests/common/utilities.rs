#![allow(dead_code)]

use std::fs;

use querymode_core::query::description::{
    Aggregation, Breakout, QueryDescription, SemanticType,
};

pub fn load_fixture(name: &str) -> QueryDescription {
    let path = format!("tests/fixtures/queries/{}", name);
    let s = fs::read_to_string(path).expect("fixture read");
    serde_json::from_str::<QueryDescription>(&s).expect("fixture parse")
}

pub fn count() -> Aggregation {
    Aggregation { function: "count".into(), field: None }
}

pub fn breakout(field: &str, semantic_type: SemanticType) -> Breakout {
    Breakout { field: field.into(), semantic_type, granularity: None }
}
