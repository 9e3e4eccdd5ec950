//! Template and resource loading from the content root
//!
//! The template is mandatory. Styles and scripts are concatenated in the order
//! given; a listed file that does not exist contributes nothing.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::{LoadError, LoadedResources, ResourceType, SkippedResource};

/// Reads templates and resources relative to a fixed root
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    root: PathBuf,
}

impl ResourceLoader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a template and merge its style and script lists
    ///
    /// Each present resource is appended followed by a newline, preserving
    /// input order. Missing resources are recorded in `skipped`.
    pub fn load<S, J>(
        &self,
        template: impl AsRef<Path>,
        styles: S,
        scripts: J,
    ) -> Result<LoadedResources, LoadError>
    where
        S: IntoIterator,
        S::Item: AsRef<Path>,
        J: IntoIterator,
        J::Item: AsRef<Path>,
    {
        let template_path = self.root.join(template);
        let template = match read_optional(&template_path, ResourceType::Template)? {
            Some(text) => text,
            None => return Err(LoadError::MissingTemplate(template_path)),
        };

        let mut loaded = LoadedResources {
            template,
            ..LoadedResources::default()
        };

        for style in styles {
            let path = self.root.join(style);
            self.append(&path, ResourceType::Style, &mut loaded)?;
        }

        for script in scripts {
            let path = self.root.join(script);
            self.append(&path, ResourceType::Script, &mut loaded)?;
        }

        log::debug!(
            "Loaded template {} ({} style bytes, {} script bytes, {} skipped)",
            template_path.display(),
            loaded.styles.len(),
            loaded.scripts.len(),
            loaded.skipped.len()
        );

        Ok(loaded)
    }

    fn append(
        &self,
        path: &Path,
        resource_type: ResourceType,
        loaded: &mut LoadedResources,
    ) -> Result<(), LoadError> {
        let Some(content) = read_optional(path, resource_type)? else {
            log::debug!("Skipping missing {resource_type}: {}", path.display());
            loaded.skipped.push(SkippedResource {
                path: path.to_path_buf(),
                resource_type,
            });
            return Ok(());
        };

        let blob = match resource_type {
            ResourceType::Script => &mut loaded.scripts,
            _ => &mut loaded.styles,
        };
        blob.push_str(&content);
        blob.push('\n');
        Ok(())
    }
}

/// Read a text file, mapping "does not exist" to `None`
fn read_optional(path: &Path, resource_type: ResourceType) -> Result<Option<String>, LoadError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(LoadError::Read {
            path: path.to_path_buf(),
            resource_type,
            source,
        }),
    }
}
