use ehrgen_codegen::{
    CodeBuilder, LanguageCodegen, PreviewFile, TypeMapper, group_by_namespace,
};
use ehrgen_schema::{Field, Schema};

use crate::{TYPESCRIPT_NAMING, TypeScriptTypeMapper};

/// TypeScript code generator that produces interface declarations.
pub struct Generator;

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render(&self, schemas: &[Schema]) -> Vec<PreviewFile> {
        let mut files = Vec::new();

        for (namespace, group) in group_by_namespace(schemas) {
            files.push(PreviewFile::new(
                format!("{namespace}/index.ts"),
                render_index(&group),
            ));

            for schema in group {
                let Some(name) = schema.resolved_name() else {
                    continue;
                };
                files.push(PreviewFile::new(
                    format!("{namespace}/{}.ts", TYPESCRIPT_NAMING.file_name(name)),
                    render_schema(schema, name),
                ));
            }
        }

        files
    }
}

fn render_index(schemas: &[&Schema]) -> String {
    CodeBuilder::typescript()
        .line("// Generated from YAML schemas.")
        .blank()
        .each(
            schemas.iter().filter_map(|s| s.resolved_name()),
            |b, name| {
                b.line(&format!(
                    "export * from \"./{}\";",
                    TYPESCRIPT_NAMING.file_name(name)
                ))
            },
        )
        .build()
}

fn render_schema(schema: &Schema, name: &str) -> String {
    let type_name = TYPESCRIPT_NAMING.type_name(name);

    let mut builder = CodeBuilder::typescript().line("// Generated from YAML schemas.").blank();
    builder = render_interface(builder, &type_name, schema.description.as_deref(), &schema.fields);

    let mut nested = Vec::new();
    collect_nested(&type_name, &schema.fields, &mut nested);
    for (nested_name, fields) in nested {
        builder = builder.blank();
        builder = render_interface(builder, &nested_name, None, fields);
    }

    builder.build()
}

fn render_interface(
    builder: CodeBuilder,
    type_name: &str,
    description: Option<&str>,
    fields: &[Field],
) -> CodeBuilder {
    let builder = match description {
        Some(description) => builder.line(&format!("/** {description} */")),
        None => builder,
    };

    builder.block_with_close(&format!("export interface {type_name} {{"), "}", |b| {
        b.each(fields, |b, field| render_field(b, type_name, field))
    })
}

fn render_field(builder: CodeBuilder, parent: &str, field: &Field) -> CodeBuilder {
    let ts_type = if field.is_composite() {
        nested_type_name(parent, &field.name)
    } else {
        TypeScriptTypeMapper.map_token(&field.ty)
    };
    let marker = if field.required { "" } else { "?" };

    let mut builder = builder;
    if let Some(comment) = field_doc(field) {
        builder = builder.line(&format!("/** {comment} */"));
    }
    builder.line(&format!(
        "{}{marker}: {ts_type};",
        TYPESCRIPT_NAMING.field_name(&field.name)
    ))
}

fn field_doc(field: &Field) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(description) = &field.description {
        parts.push(description.clone());
    }
    if let Some(level) = field.pii_level {
        parts.push(format!("pii: {}", level.as_str()));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

fn nested_type_name(parent: &str, field_name: &str) -> String {
    format!("{parent}{}", TYPESCRIPT_NAMING.type_name(field_name))
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
