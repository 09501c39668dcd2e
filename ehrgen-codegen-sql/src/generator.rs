use ehrgen_codegen::{
    CodeBuilder, LanguageCodegen, PreviewFile, TypeMapper, group_by_namespace,
};
use ehrgen_core::to_snake_case;
use ehrgen_schema::{Field, Schema, SchemaMapping};

use crate::{SQL_NAMING, SqlTypeMapper};

/// SQL DDL generator targeting PostgreSQL.
pub struct Generator;

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "sql"
    }

    fn file_extension(&self) -> &'static str {
        "sql"
    }

    fn render(&self, schemas: &[Schema]) -> Vec<PreviewFile> {
        let mut files = Vec::new();

        for (namespace, group) in group_by_namespace(schemas) {
            files.push(PreviewFile::new(
                format!("{namespace}/init.sql"),
                render_init(namespace, &group),
            ));

            for schema in group {
                let Some(name) = schema.resolved_name() else {
                    continue;
                };
                files.push(PreviewFile::new(
                    format!("{namespace}/{}.sql", SQL_NAMING.file_name(name)),
                    render_table(namespace, schema, name),
                ));
            }
        }

        files
    }

    fn render_mappings(&self, mappings: &[SchemaMapping]) -> Vec<PreviewFile> {
        mappings
            .iter()
            .map(|mapping| {
                PreviewFile::new(
                    format!(
                        "mappers/{}/{}_to_{}.sql",
                        mapping.source_system,
                        to_snake_case(&mapping.source_table),
                        to_snake_case(&mapping.target_resource)
                    ),
                    render_mapping(mapping),
                )
            })
            .collect()
    }
}

fn render_init(namespace: &str, schemas: &[&Schema]) -> String {
    CodeBuilder::sql()
        .line("-- Generated from YAML schemas.")
        .line(&format!("CREATE SCHEMA IF NOT EXISTS {namespace};"))
        .blank()
        .each(
            schemas.iter().filter_map(|s| s.resolved_name()),
            |b, name| b.line(&format!("\\ir {}.sql", SQL_NAMING.file_name(name))),
        )
        .build()
}

fn render_table(namespace: &str, schema: &Schema, name: &str) -> String {
    let table = format!("{namespace}.{}", SQL_NAMING.type_name(name));

    let mut columns = Vec::new();
    collect_columns(&schema.fields, "", &mut columns);

    let mut builder = CodeBuilder::sql();
    if let Some(description) = &schema.description {
        builder = builder.line(&format!("-- {description}"));
    }
    builder = builder
        .line(&format!("CREATE TABLE {table} ("))
        .indent()
        .each(columns.iter().enumerate(), |b, (i, column)| {
            let comma = if i + 1 < columns.len() { "," } else { "" };
            let not_null = if column.required { " NOT NULL" } else { "" };
            b.line(&format!("{} {}{not_null}{comma}", column.name, column.sql_type))
        })
        .dedent()
        .line(");");

    let commented: Vec<&Column> = columns.iter().filter(|c| c.comment.is_some()).collect();
    if !commented.is_empty() {
        builder = builder.blank().each(commented, |b, column| {
            let comment = column.comment.as_deref().unwrap_or_default();
            b.line(&format!(
                "COMMENT ON COLUMN {table}.{} IS '{}';",
                column.name,
                comment.replace('\'', "''")
            ))
        });
    }

    builder.build()
}

struct Column {
    name: String,
    sql_type: String,
    required: bool,
    comment: Option<String>,
}

/// Flatten the field tree into prefixed columns, depth-first in schema order.
fn collect_columns(fields: &[Field], prefix: &str, out: &mut Vec<Column>) {
    for field in fields {
        let base = SQL_NAMING.field_name(&field.name);
        let name = if prefix.is_empty() {
            base
        } else {
            format!("{prefix}_{base}")
        };

        if field.is_composite() {
            collect_columns(&field.children, &name, out);
        } else {
            out.push(Column {
                name,
                sql_type: SqlTypeMapper.map_token(&field.ty),
                required: field.required,
                comment: column_comment(field),
            });
        }
    }
}

fn column_comment(field: &Field) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(description) = &field.description {
        parts.push(description.clone());
    }
    if let Some(level) = field.pii_level {
        parts.push(format!("pii: {}", level.as_str()));
    }
    if let Some(category) = field.pii_category {
        parts.push(format!("category: {}", category.as_str()));
    }
    if let Some(identifier) = field.hipaa_identifier {
        parts.push(format!("hipaa: {}", identifier.as_str()));
    }
    if let Some(strategy) = field.masking_strategy {
        parts.push(format!("masking: {}", strategy.as_str()));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

fn render_mapping(mapping: &SchemaMapping) -> String {
    let target = to_snake_case(&mapping.target_resource);
    let count = mapping.field_mappings.len();

    CodeBuilder::sql()
        .line(&format!(
            "-- Maps {} {} rows to {}.",
            mapping.source_system, mapping.source_table, mapping.target_resource
        ))
        .line(&format!("INSERT INTO {target} ("))
        .indent()
        .each(
            mapping.field_mappings.iter().enumerate(),
            |b, (i, field_mapping)| {
                let comma = if i + 1 < count { "," } else { "" };
                b.line(&format!(
                    "{}{comma}",
                    SQL_NAMING.field_name(&field_mapping.target)
                ))
            },
        )
        .dedent()
        .line(")")
        .line("SELECT")
        .indent()
        .each(
            mapping.field_mappings.iter().enumerate(),
            |b, (i, field_mapping)| {
                let comma = if i + 1 < count { "," } else { "" };
                let transform = match &field_mapping.transform {
                    Some(transform) => format!(" -- transform: {transform}"),
                    None => String::new(),
                };
                b.line(&format!("{}{comma}{transform}", field_mapping.source))
            },
        )
        .dedent()
        .line(&format!(
            "FROM {}.{};",
            mapping.source_system, mapping.source_table
        ))
        .build()
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
    description: Date of birth
    pii_level: high
    masking_strategy: generalize
  - name: address
    children:
      - name: city
        type: string
      - name: postalCode
        type: string
        pii_level: medium
"#;

    #[test]
    fn test_render_emits_init_and_table_units() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let files = Generator.render(&schemas);

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["fhir_r4/init.sql", "fhir_r4/patient.sql"]);
        assert!(files[0].content.contains("CREATE SCHEMA IF NOT EXISTS fhir_r4;"));
        assert!(files[0].content.contains("\\ir patient.sql"));
    }

    #[test]
    fn test_table_is_schema_qualified() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let files = Generator.render(&schemas);

        assert!(files[1].content.contains("CREATE TABLE fhir_r4.patient ("));
    }

    #[test]
    fn test_required_column_is_not_null() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let files = Generator.render(&schemas);

        let ddl = &files[1].content;
        assert!(ddl.contains("id TEXT NOT NULL,"));
        assert!(ddl.contains("birth_date DATE,"));
    }

    #[test]
    fn test_composite_fields_are_flattened() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let files = Generator.render(&schemas);

        let ddl = &files[1].content;
        assert!(ddl.contains("address_city TEXT,"));
        assert!(ddl.contains("address_postal_code TEXT"));
    }

    #[test]
    fn test_column_comments_carry_protection_metadata() {
        let schemas = vec![load(PATIENT, "fhir_r4")];

        let files = Generator.render(&schemas);

        let ddl = &files[1].content;
        assert!(ddl.contains(
            "COMMENT ON COLUMN fhir_r4.patient.birth_date IS 'Date of birth; pii: high; masking: generalize';"
        ));
        assert!(ddl.contains("COMMENT ON COLUMN fhir_r4.patient.address_postal_code IS 'pii: medium';"));
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

    #[test]
    fn test_mapping_renders_insert_select_skeleton() {
        let mapping: SchemaMapping = serde_yaml::from_str(
            r#"
source_system: epic_clarity
source_table: PATIENT
target_resource: Patient
field_mappings:
  - source: BIRTH_DATE
    target: birthDate
    transform: to_iso8601
  - source: PAT_NAME
    target: name
"#,
        )
        .unwrap();

        let files = Generator.render_mappings(&[mapping]);

        assert_eq!(files[0].path, "mappers/epic_clarity/patient_to_patient.sql");
        let sql = &files[0].content;
        assert!(sql.contains("INSERT INTO patient ("));
        assert!(sql.contains("birth_date,"));
        assert!(sql.contains("BIRTH_DATE, -- transform: to_iso8601"));
        assert!(sql.contains("FROM epic_clarity.PATIENT;"));
    }
}
