use ehrgen_codegen::{
    CodeBuilder, LanguageCodegen, PreviewFile, TypeMapper, group_by_namespace,
};
use ehrgen_schema::{Field, Schema};

use crate::{RUST_NAMING, RustTypeMapper};

/// Rust code generator that produces serde-derive structs.
pub struct Generator;

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn render(&self, schemas: &[Schema]) -> Vec<PreviewFile> {
        let mut files = Vec::new();

        for (namespace, group) in group_by_namespace(schemas) {
            files.push(PreviewFile::new(
                format!("{namespace}/mod.rs"),
                render_mod(&group),
            ));

            for schema in group {
                let Some(name) = schema.resolved_name() else {
                    continue;
                };
                files.push(PreviewFile::new(
                    format!("{namespace}/{}.rs", RUST_NAMING.file_name(name)),
                    render_schema(schema, name),
                ));
            }
        }

        files
    }
}

fn render_mod(schemas: &[&Schema]) -> String {
    let names: Vec<&str> = schemas.iter().filter_map(|s| s.resolved_name()).collect();

    CodeBuilder::rust()
        .line("//! Generated from YAML schemas.")
        .blank()
        .each(&names, |b, name| {
            b.line(&format!("mod {};", RUST_NAMING.file_name(name)))
        })
        .blank()
        .each(&names, |b, name| {
            b.line(&format!(
                "pub use {}::{};",
                RUST_NAMING.file_name(name),
                RUST_NAMING.type_name(name)
            ))
        })
        .build()
}

fn render_schema(schema: &Schema, name: &str) -> String {
    let type_name = RUST_NAMING.type_name(name);

    let mut builder = CodeBuilder::rust();
    if let Some(description) = &schema.description {
        builder = builder.line(&format!("//! {description}"));
        builder = builder.blank();
    }
    builder = builder
        .line("use serde::{Deserialize, Serialize};")
        .blank();

    builder = render_struct(builder, &type_name, schema.description.as_deref(), &schema.fields);

    // Composite fields become sibling structs after the root type.
    let mut nested = Vec::new();
    collect_nested(&type_name, &schema.fields, &mut nested);
    for (nested_name, fields) in nested {
        builder = builder.blank();
        builder = render_struct(builder, &nested_name, None, fields);
    }

    builder.build()
}

fn render_struct(
    builder: CodeBuilder,
    type_name: &str,
    description: Option<&str>,
    fields: &[Field],
) -> CodeBuilder {
    let builder = match description {
        Some(description) => builder.line(&format!("/// {description}")),
        None => builder,
    };

    builder
        .line("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]")
        .block_with_close(&format!("pub struct {type_name} {{"), "}", |b| {
            b.each(fields, |b, field| render_field(b, type_name, field))
        })
}

fn render_field(builder: CodeBuilder, parent: &str, field: &Field) -> CodeBuilder {
    let rust_name = RUST_NAMING.field_name(&field.name);
    let base_type = if field.is_composite() {
        nested_type_name(parent, &field.name)
    } else {
        RustTypeMapper.map_token(&field.ty)
    };
    let rust_type = if field.required {
        base_type
    } else {
        format!("Option<{base_type}>")
    };

    let mut builder = builder;
    if let Some(description) = &field.description {
        builder = builder.line(&format!("/// {description}"));
    }
    if let Some(level) = field.pii_level {
        builder = builder.line(&format!("/// pii: {}", level.as_str()));
    }
    if rust_name != field.name {
        builder = builder.line(&format!("#[serde(rename = \"{}\")]", field.name));
    }
    if !field.required {
        builder = builder.line("#[serde(skip_serializing_if = \"Option::is_none\")]");
    }
    builder.line(&format!("pub {rust_name}: {rust_type},"))
}

fn nested_type_name(parent: &str, field_name: &str) -> String {
    format!("{parent}{}", RUST_NAMING.type_name(field_name))
}

fn collect_nested<'a>(parent: &str, fields: &'a [Field], out: &mut Vec<(String, &'a [Field])>) {
    for field in fields {
        if field.is_composite() {
            let nested_name = nested_type_name(parent, &field.name);
            out.push((nested_name.clone(), &field.children));
            collect_nested(&nested_name, &field.children, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(yaml: &str, namespace: &str) -> Schema {
        let mut schema: Schema = serde_yaml::from_str(yaml).unwrap();
        schema.namespace = namespace.to_string();
        schema
    }

    const PATIENT: &str = r#"
resource: Patient
description: Demographics and administrative information.
fields:
  - name: id
    type: id
    required: true
  - name: birthDate
    type: date
    pii_level: high
  - name: type
    type: code
  - name: address
    children:
      - name: city
        type: string
"#;

    #[test]
    fn test_render_emits_mod_and_schema_units() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let files = Generator.render(&schemas);

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["fhir_r4/mod.rs", "fhir_r4/patient.rs"]);
        assert!(files[0].content.contains("mod patient;"));
        assert!(files[0].content.contains("pub use patient::Patient;"));
    }

    #[test]
    fn test_required_field_has_no_option() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let files = Generator.render(&schemas);

        let module = &files[1].content;
        assert!(module.contains("pub id: String,"));
        assert!(module.contains("pub birth_date: Option<chrono::NaiveDate>,"));
    }

    #[test]
    fn test_wire_name_preserved_with_rename() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let files = Generator.render(&schemas);

        let module = &files[1].content;
        assert!(module.contains("#[serde(rename = \"birthDate\")]"));
        // The snake name already matches the wire name, so no rename.
        assert!(!module.contains("#[serde(rename = \"id\")]"));
    }

    #[test]
    fn test_reserved_word_uses_raw_identifier() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let files = Generator.render(&schemas);

        let module = &files[1].content;
        assert!(module.contains("#[serde(rename = \"type\")]"));
        assert!(module.contains("pub r#type: Option<String>,"));
    }

    #[test]
    fn test_composite_becomes_sibling_struct() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let files = Generator.render(&schemas);

        let module = &files[1].content;
        assert!(module.contains("pub address: Option<PatientAddress>,"));
        assert!(module.contains("pub struct PatientAddress {"));
        assert!(module.contains("pub city: Option<String>,"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let first = Generator.render(&schemas);
        let second = Generator.render(&schemas);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.path, b.path);
            assert_eq!(a.content, b.content);
        }
    }
}
