//! Go query templates.

use super::TemplateSet;

const FUNCTIONS: &str = r#"
(function_declaration
  name: (identifier) @function.name) @function
"#;

const METHODS: &str = r#"
(method_declaration
  name: (field_identifier) @method.name) @method
"#;

const STRUCTS: &str = r#"
(type_declaration
  (type_spec
    name: (type_identifier) @struct.name
    type: (struct_type))) @struct
"#;

const INTERFACES: &str = r#"
(type_declaration
  (type_spec
    name: (type_identifier) @interface.name
    type: (interface_type))) @interface
"#;

const IMPORTS: &str = r#"
(import_spec) @import
"#;

pub fn templates() -> TemplateSet {
    TemplateSet::new()
        .with_category("functions", &[FUNCTIONS, METHODS])
        .with_category("structs", &[STRUCTS])
        .with_category("interfaces", &[INTERFACES])
        .with_category("imports", &[IMPORTS])
}

pub fn register() {
    super::register("go", templates());
}
