//! JavaScript query templates.

use super::TemplateSet;

const FUNCTIONS: &str = r#"
(function_declaration
  name: (identifier) @function.name) @function
"#;

const METHODS: &str = r#"
(method_definition
  name: (property_identifier) @method.name) @method
"#;

const CLASSES: &str = r#"
(class_declaration
  name: (identifier) @class.name) @class
"#;

const IMPORTS: &str = r#"
(import_statement) @import
"#;

pub fn templates() -> TemplateSet {
    TemplateSet::new()
        .with_category("functions", &[FUNCTIONS, METHODS])
        .with_category("classes", &[CLASSES])
        .with_category("imports", &[IMPORTS])
}

pub fn register() {
    super::register("javascript", templates());
}
