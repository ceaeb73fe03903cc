//! Python query templates.

use super::TemplateSet;

const FUNCTIONS: &str = r#"
(function_definition
  name: (identifier) @function.name) @function
"#;

const CLASSES: &str = r#"
(class_definition
  name: (identifier) @class.name) @class
"#;

// import module / import module as alias
const PLAIN_IMPORTS: &str = r#"
(import_statement
  name: (dotted_name) @import.name) @import
"#;

const ALIASED_IMPORTS: &str = r#"
(import_statement
  name: (aliased_import
    name: (dotted_name) @import.name)) @import
"#;

// from module import name
const FROM_IMPORTS: &str = r#"
(import_from_statement
  module_name: (dotted_name) @import.name) @import
"#;

// from . import name - no module identifier to capture
const RELATIVE_IMPORTS: &str = r#"
(import_from_statement
  module_name: (relative_import)) @import
"#;

// @name / @name(...) / @module.name
const BARE_DECORATORS: &str = r#"
(decorator
  (identifier) @decorator.name) @decorator
"#;

const CALL_DECORATORS: &str = r#"
(decorator
  (call
    function: (identifier) @decorator.name)) @decorator
"#;

const ATTRIBUTE_DECORATORS: &str = r#"
(decorator
  (attribute
    attribute: (identifier) @decorator.name)) @decorator
"#;

pub fn templates() -> TemplateSet {
    TemplateSet::new()
        .with_category("functions", &[FUNCTIONS])
        .with_category("classes", &[CLASSES])
        .with_category(
            "imports",
            &[PLAIN_IMPORTS, ALIASED_IMPORTS, FROM_IMPORTS, RELATIVE_IMPORTS],
        )
        .with_category(
            "decorators",
            &[BARE_DECORATORS, CALL_DECORATORS, ATTRIBUTE_DECORATORS],
        )
}

pub fn register() {
    super::register("python", templates());
}
