//! Rust query templates.

use super::TemplateSet;

const FUNCTIONS: &str = r#"
(function_item
  name: (identifier) @function.name) @function
"#;

const STRUCTS: &str = r#"
(struct_item
  name: (type_identifier) @struct.name) @struct
"#;

const ENUMS: &str = r#"
(enum_item
  name: (type_identifier) @enum.name) @enum
"#;

const TRAITS: &str = r#"
(trait_item
  name: (type_identifier) @trait.name) @trait
"#;

const IMPORTS: &str = r#"
(use_declaration) @import
"#;

pub fn templates() -> TemplateSet {
    TemplateSet::new()
        .with_category("functions", &[FUNCTIONS])
        .with_category("structs", &[STRUCTS])
        .with_category("enums", &[ENUMS])
        .with_category("traits", &[TRAITS])
        .with_category("imports", &[IMPORTS])
}

pub fn register() {
    super::register("rust", templates());
}

#[cfg(test)]
mod tests {
    use crate::extract::extract;

    #[test]
    fn test_rust_declarations() {
        let source = br#"
use std::collections::HashMap;

pub struct Point {
    x: i32,
}

pub enum Shape {
    Circle,
}

pub trait Draw {
    fn draw(&self);
}

impl Point {
    fn new() -> Self {
        Point { x: 0 }
    }
}

fn main() {
    let _ = HashMap::<i32, i32>::new();
}
"#;
        let result = extract("rust", source).unwrap();
        let inventory = &result.inventory;

        let functions = inventory.category("functions").unwrap();
        assert!(functions.iter().any(|e| e.name.as_deref() == Some("new")));
        assert!(functions.iter().any(|e| e.name.as_deref() == Some("main")));

        assert!(inventory.category("structs").unwrap().iter().any(|e| e.name.as_deref() == Some("Point")));
        assert!(inventory.category("enums").unwrap().iter().any(|e| e.name.as_deref() == Some("Shape")));
        assert!(inventory.category("traits").unwrap().iter().any(|e| e.name.as_deref() == Some("Draw")));
        assert_eq!(inventory.category("imports").unwrap().len(), 1);
    }
}
