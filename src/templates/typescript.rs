//! TypeScript query templates.
//!
//! Note the grammar's split between `identifier` and `type_identifier`:
//! classes and interfaces name themselves with the latter.

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
  name: (type_identifier) @class.name) @class
"#;

const INTERFACES: &str = r#"
(interface_declaration
  name: (type_identifier) @interface.name) @interface
"#;

const ENUMS: &str = r#"
(enum_declaration
  name: (identifier) @enum.name) @enum
"#;

const IMPORTS: &str = r#"
(import_statement) @import
"#;

const BARE_DECORATORS: &str = r#"
(decorator
  (identifier) @decorator.name) @decorator
"#;

const CALL_DECORATORS: &str = r#"
(decorator
  (call_expression
    function: (identifier) @decorator.name)) @decorator
"#;

pub fn templates() -> TemplateSet {
    TemplateSet::new()
        .with_category("functions", &[FUNCTIONS, METHODS])
        .with_category("classes", &[CLASSES])
        .with_category("interfaces", &[INTERFACES])
        .with_category("enums", &[ENUMS])
        .with_category("imports", &[IMPORTS])
        .with_category("decorators", &[BARE_DECORATORS, CALL_DECORATORS])
}

pub fn register() {
    super::register("typescript", templates());
}
