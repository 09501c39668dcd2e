//! Schema and mapping discovery over a namespaced directory tree.
//!
//! Each immediate subdirectory of the schema root is a namespace, except the
//! reserved override directory. Discovery is resilient: a corrupt or
//! unrelated YAML file is skipped with a warning and never aborts the load.
//! Only the base namespace is mandatory; its absence is a hard error.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::{Error, Result};
use crate::field::Field;
use crate::mapping::SchemaMapping;
use crate::overrides::OVERRIDE_DIR;
use crate::schema::Schema;

/// The canonical base domain model. Expected to always exist.
pub const BASE_NAMESPACE: &str = "fhir_r4";

/// Filename suffix distinguishing mapping files from schema files.
pub const MAPPING_SUFFIX: &str = "_mapping.yaml";

const SCHEMA_EXTENSION: &str = "yaml";

/// Recoverable per-file problem observed during discovery.
#[derive(Debug, Error)]
pub enum LoadWarning {
    #[error("skipping '{}': {error}", path.display())]
    Skipped { path: PathBuf, error: Box<Error> },

    #[error("skipping '{}': no 'name' or 'resource' key", path.display())]
    Unnamed { path: PathBuf },

    #[error(
        "'{}': field '{field}' declares both a type and children; children win",
        path.display()
    )]
    CompositeWithScalarType { path: PathBuf, field: String },
}

/// Schemas discovered by one load, in deterministic order, plus the warnings
/// accumulated along the way.
#[derive(Debug, Default)]
pub struct Loaded {
    pub schemas: Vec<Schema>,
    pub warnings: Vec<LoadWarning>,
}

/// Mapping documents discovered by one load.
#[derive(Debug, Default)]
pub struct LoadedMappings {
    pub mappings: Vec<SchemaMapping>,
    pub warnings: Vec<LoadWarning>,
}

/// Loads schemas and mappings from a schema root directory.
pub struct Loader {
    root: PathBuf,
}

impl Loader {
    /// Create a new loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the schema root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load all schemas from every namespace.
    ///
    /// Ordering is deterministic: the base namespace first, the remaining
    /// namespaces lexicographic, files lexicographic within each namespace.
    pub fn load_all(&self) -> Result<Loaded> {
        let namespaces = self.namespaces()?;

        let mut loaded = Loaded::default();
        for namespace in &namespaces {
            self.load_namespace(namespace, &mut loaded);
        }
        Ok(loaded)
    }

    /// Load all mapping documents with a full recursive walk of the tree.
    ///
    /// Unlike schema loading, mapping discovery ignores namespace boundaries;
    /// only the override directory is excluded.
    pub fn load_mappings(&self) -> Result<LoadedMappings> {
        let mut files = Vec::new();
        collect_mapping_files(&self.root, true, &mut files)?;
        files.sort();

        let mut loaded = LoadedMappings::default();
        for path in files {
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    loaded.warnings.push(LoadWarning::Skipped {
                        path: path.clone(),
                        error: Error::io(&path, e),
                    });
                    continue;
                }
            };
            match serde_yaml::from_str::<SchemaMapping>(&content) {
                Ok(mut mapping) => {
                    mapping.source_file = path;
                    loaded.mappings.push(mapping);
                }
                Err(e) => {
                    loaded.warnings.push(LoadWarning::Skipped {
                        path: path.clone(),
                        error: Error::parse(e, &content, &path.display().to_string()),
                    });
                }
            }
        }
        Ok(loaded)
    }

    /// List loadable schemas as `"namespace/name"` strings.
    pub fn list_schemas(&self) -> Result<Vec<String>> {
        let loaded = self.load_all()?;
        Ok(loaded
            .schemas
            .iter()
            .map(|s| {
                format!(
                    "{}/{}",
                    s.namespace,
                    s.resolved_name().unwrap_or_default()
                )
            })
            .collect())
    }

    /// Enumerate namespace directories, base namespace first.
    fn namespaces(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| Error::io(&self.root, e))?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name != OVERRIDE_DIR)
            .collect();
        names.sort();

        let Some(base_index) = names.iter().position(|name| name == BASE_NAMESPACE) else {
            return Err(Error::missing_base_namespace(BASE_NAMESPACE, &self.root));
        };
        let base = names.remove(base_index);
        names.insert(0, base);
        Ok(names)
    }

    /// Load one namespace directory. Enumeration failures leave the namespace
    /// empty; they are not errors.
    fn load_namespace(&self, namespace: &str, loaded: &mut Loaded) {
        let dir = self.root.join(namespace);
        let Ok(entries) = std::fs::read_dir(&dir) else {
            return;
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_schema_file(path))
            .collect();
        files.sort();

        for path in files {
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    loaded.warnings.push(LoadWarning::Skipped {
                        path: path.clone(),
                        error: Error::io(&path, e),
                    });
                    continue;
                }
            };
            let mut schema = match serde_yaml::from_str::<Schema>(&content) {
                Ok(schema) => schema,
                Err(e) => {
                    loaded.warnings.push(LoadWarning::Skipped {
                        path: path.clone(),
                        error: Error::parse(e, &content, &path.display().to_string()),
                    });
                    continue;
                }
            };
            if schema.resolved_name().is_none() {
                loaded.warnings.push(LoadWarning::Unnamed { path });
                continue;
            }
            warn_ambiguous_composites(&schema.fields, &path, &mut loaded.warnings);
            schema.source_file = path;
            schema.namespace = namespace.to_string();
            loaded.schemas.push(schema);
        }
    }
}

fn is_schema_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    path.extension().and_then(|e| e.to_str()) == Some(SCHEMA_EXTENSION)
        && !name.ends_with(MAPPING_SUFFIX)
}

fn collect_mapping_files(dir: &Path, is_root: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        // Only an unreadable root aborts the walk.
        Err(e) if is_root => return Err(Error::io(dir, e)),
        Err(_) => return Ok(()),
    };

    for entry in entries.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|n| n.to_str()) == Some(OVERRIDE_DIR) {
                continue;
            }
            collect_mapping_files(&path, false, files)?;
        } else if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(MAPPING_SUFFIX))
        {
            files.push(path);
        }
    }
    Ok(())
}

/// A field with both a non-empty scalar type and children is ambiguous;
/// generators follow the children, and the operator gets told.
fn warn_ambiguous_composites(fields: &[Field], path: &Path, warnings: &mut Vec<LoadWarning>) {
    for field in fields {
        if field.is_composite() && !field.ty.is_empty() {
            warnings.push(LoadWarning::CompositeWithScalarType {
                path: path.to_path_buf(),
                field: field.name.clone(),
            });
        }
        warn_ambiguous_composites(&field.children, path, warnings);
    }
}
