use ehrgen_codegen::{
    CodeBuilder, LanguageCodegen, PreviewFile, TypeMapper, group_by_namespace,
};
use ehrgen_core::to_snake_case;
use ehrgen_schema::{Field, Schema, SchemaMapping};

use crate::{PYTHON_NAMING, PythonTypeMapper};

/// Python code generator that produces dataclass modules.
pub struct Generator;

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn render(&self, schemas: &[Schema]) -> Vec<PreviewFile> {
        let mut files = Vec::new();

        for (namespace, group) in group_by_namespace(schemas) {
            files.push(PreviewFile::new(
                format!("{namespace}/__init__.py"),
                render_init(&group),
            ));

            for schema in group {
                let Some(name) = schema.resolved_name() else {
                    continue;
                };
                files.push(PreviewFile::new(
                    format!("{namespace}/{}.py", PYTHON_NAMING.file_name(name)),
                    render_schema(schema, name),
                ));
            }
        }

        files
    }

    fn render_mappings(&self, mappings: &[SchemaMapping]) -> Vec<PreviewFile> {
        mappings
            .iter()
            .map(|mapping| {
                let stem = mapper_stem(mapping);
                PreviewFile::new(
                    format!("mappers/{}/{stem}.py", mapping.source_system),
                    render_mapping(mapping, &stem),
                )
            })
            .collect()
    }
}

fn render_init(schemas: &[&Schema]) -> String {
    let names: Vec<&str> = schemas.iter().filter_map(|s| s.resolved_name()).collect();

    CodeBuilder::python()
        .line("\"\"\"Generated from YAML schemas.\"\"\"")
        .blank()
        .each(&names, |b, name| {
            b.line(&format!(
                "from .{} import {}",
                PYTHON_NAMING.file_name(name),
                PYTHON_NAMING.type_name(name)
            ))
        })
        .blank()
        .line("__all__ = [")
        .indent()
        .each(&names, |b, name| {
            b.line(&format!("\"{}\",", PYTHON_NAMING.type_name(name)))
        })
        .dedent()
        .line("]")
        .build()
}

fn render_schema(schema: &Schema, name: &str) -> String {
    let type_name = PYTHON_NAMING.type_name(name);
    let docstring = schema
        .description
        .clone()
        .unwrap_or_else(|| format!("{type_name} schema."));

    let mut builder = CodeBuilder::python()
        .line(&format!("\"\"\"{docstring}\"\"\""))
        .blank()
        .line("from __future__ import annotations")
        .blank()
        .line("from dataclasses import dataclass")
        .line("from datetime import date, datetime")
        .line("from typing import Any");

    // Composites become their own dataclasses, defined before the parent.
    let mut nested = Vec::new();
    collect_nested(&type_name, &schema.fields, &mut nested);
    for (nested_name, fields, parent_path) in &nested {
        builder = render_class(
            builder,
            nested_name,
            &format!("Nested type for {parent_path}."),
            fields,
        );
    }

    builder = render_class(builder, &type_name, &docstring, &schema.fields);
    builder.build()
}

fn render_class(
    builder: CodeBuilder,
    type_name: &str,
    docstring: &str,
    fields: &[Field],
) -> CodeBuilder {
    // Python dataclasses require defaulted fields after positional ones, so
    // required fields come first regardless of schema order.
    let ordered: Vec<&Field> = fields
        .iter()
        .filter(|f| f.required)
        .chain(fields.iter().filter(|f| !f.required))
        .collect();

    builder
        .blank()
        .blank()
        .line("@dataclass")
        .line(&format!("class {type_name}:"))
        .indent()
        .line(&format!("\"\"\"{docstring}\"\"\""))
        .when(!ordered.is_empty(), |b| b.blank())
        .each(ordered, |b, field| b.line(&render_field(type_name, field)))
        .when(fields.is_empty(), |b| b.blank().line("pass"))
        .dedent()
}

fn render_field(parent: &str, field: &Field) -> String {
    let py_type = if field.is_composite() {
        nested_type_name(parent, &field.name)
    } else {
        PythonTypeMapper.map_token(&field.ty)
    };

    let mut line = format!("{}: {}", PYTHON_NAMING.field_name(&field.name), py_type);
    if !field.required {
        line.push_str(" | None = None");
    }
    if let Some(comment) = field_comment(field) {
        line.push_str("  # ");
        line.push_str(&comment);
    }
    line
}

fn field_comment(field: &Field) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(description) = &field.description {
        parts.push(description.clone());
    }
    if let Some(level) = field.pii_level {
        parts.push(format!("pii: {}", level.as_str()));
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

fn nested_type_name(parent: &str, field_name: &str) -> String {
    format!("{parent}{}", PYTHON_NAMING.type_name(field_name))
}

/// Collect nested dataclasses depth-first so inner types precede the types
/// that reference them.
fn collect_nested<'a>(
    parent: &str,
    fields: &'a [Field],
    out: &mut Vec<(String, &'a [Field], String)>,
) {
    for field in fields {
        if field.is_composite() {
            let nested_name = nested_type_name(parent, &field.name);
            collect_nested(&nested_name, &field.children, out);
            out.push((
                nested_name,
                &field.children,
                format!("{parent}.{}", PYTHON_NAMING.field_name(&field.name)),
            ));
        }
    }
}

fn mapper_stem(mapping: &SchemaMapping) -> String {
    format!(
        "{}_to_{}",
        to_snake_case(&mapping.source_table),
        to_snake_case(&mapping.target_resource)
    )
}

fn render_mapping(mapping: &SchemaMapping, stem: &str) -> String {
    let uses_transforms = mapping.field_mappings.iter().any(|m| m.transform.is_some());

    CodeBuilder::python()
        .line(&format!(
            "\"\"\"Maps {} {} rows to {}.\"\"\"",
            mapping.source_system, mapping.source_table, mapping.target_resource
        ))
        .blank()
        .line("from __future__ import annotations")
        .blank()
        .line("from typing import Any")
        .when(uses_transforms, |b| {
            b.blank().line("from . import transforms")
        })
        .blank()
        .blank()
        .line(&format!(
            "def map_{stem}(row: dict[str, Any]) -> dict[str, Any]:"
        ))
        .indent()
        .block_with_close("return {", "}", |b| {
            b.each(&mapping.field_mappings, |b, field_mapping| {
                let value = match &field_mapping.transform {
                    Some(transform) => format!(
                        "transforms.{}(row[\"{}\"])",
                        transform, field_mapping.source
                    ),
                    None => format!("row[\"{}\"]", field_mapping.source),
                };
                b.line(&format!("\"{}\": {},", field_mapping.target, value))
            })
        })
        .dedent()
        .build()
}
