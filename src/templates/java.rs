//! Java query templates.
//!
//! Capture convention (shared by all languages): the undotted label marks
//! the whole declaration, `<label>.name` marks its identifier.
//!
//! These patterns are written against the node shapes the bundled Java
//! grammar actually exposes. Earlier revisions queried fields the grammar
//! has since dropped (`name:`/`asterisk:` on `import_declaration`,
//! `(class_body)` under `interface_declaration`); those forms now live in
//! tests as the canonical stale-pattern case.

use super::TemplateSet;

const METHODS: &str = r#"
(method_declaration
  name: (identifier) @function.name) @function
"#;

const CONSTRUCTORS: &str = r#"
(constructor_declaration
  name: (identifier) @constructor.name) @constructor
"#;

const CLASSES: &str = r#"
(class_declaration
  name: (identifier) @class.name) @class
"#;

const INTERFACES: &str = r#"
(interface_declaration
  name: (identifier) @interface.name) @interface
"#;

// No name capture: a wildcard import has no capturable identifier.
const IMPORTS: &str = r#"
(import_declaration) @import
"#;

const MARKER_ANNOTATIONS: &str = r#"
(marker_annotation
  name: (identifier) @annotation.name) @annotation
"#;

const PARAMETERIZED_ANNOTATIONS: &str = r#"
(annotation
  name: (identifier) @annotation.name) @annotation
"#;

const ENUMS: &str = r#"
(enum_declaration
  name: (identifier) @enum.name) @enum
"#;

pub fn templates() -> TemplateSet {
    TemplateSet::new()
        .with_category("functions", &[METHODS, CONSTRUCTORS])
        .with_category("classes", &[CLASSES])
        .with_category("interfaces", &[INTERFACES])
        .with_category("imports", &[IMPORTS])
        .with_category("annotations", &[MARKER_ANNOTATIONS, PARAMETERIZED_ANNOTATIONS])
        .with_category("enums", &[ENUMS])
}

pub fn register() {
    super::register("java", templates());
}
