//! Template environment for the generated pages.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use std::path::Path;

use crate::error::Result;

pub const FRONTPAGE_TEMPLATE: &str = "frontpage.html.j2";
pub const DIRECTORY_INDEX_TEMPLATE: &str = "directory-index.html.j2";

const BUILTIN_FRONTPAGE: &str = include_str!("../templates/frontpage.html.j2");
const BUILTIN_DIRECTORY_INDEX: &str = include_str!("../templates/directory-index.html.j2");

pub struct Templates {
    env: Environment<'static>,
}

fn base_environment() -> Environment<'static> {
    let mut environment = Environment::new();
    environment.set_trim_blocks(true);
    environment.set_lstrip_blocks(true);
    environment.set_auto_escape_callback(|name| {
        if name.contains(".html") || name.contains(".htm") {
            AutoEscape::Html
        } else {
            AutoEscape::None
        }
    });
    environment
}

impl Templates {
    /// The templates shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let mut env = base_environment();
        env.add_template(FRONTPAGE_TEMPLATE, BUILTIN_FRONTPAGE)?;
        env.add_template(DIRECTORY_INDEX_TEMPLATE, BUILTIN_DIRECTORY_INDEX)?;
        Ok(Self { env })
    }

    /// Load templates by name from `path`.
    ///
    /// Templates are read lazily, so a missing file surfaces on first render.
    pub fn from_dir(path: &Path) -> Self {
        let mut env = base_environment();
        env.set_loader(minijinja::path_loader(path));
        Self { env }
    }

    /// Use `dir` if given, the builtin templates otherwise.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => {
                log::debug!("Loading templates from {}", dir.display());
                Ok(Self::from_dir(dir))
            }
            None => Self::builtin(),
        }
    }

    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_templates_parse() {
        let templates = Templates::builtin().unwrap();
        assert!(templates.env.get_template(FRONTPAGE_TEMPLATE).is_ok());
        assert!(templates.env.get_template(DIRECTORY_INDEX_TEMPLATE).is_ok());
    }

    #[test]
    fn test_from_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(DIRECTORY_INDEX_TEMPLATE),
            "{{ relative_path }}",
        )
        .unwrap();

        let templates = Templates::from_dir(temp_dir.path());
        let html = templates
            .render(
                DIRECTORY_INDEX_TEMPLATE,
                minijinja::context! { relative_path => "<main>" },
            )
            .unwrap();
        assert_eq!(html, "&lt;main&gt;");
    }

    #[test]
    fn test_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let templates = Templates::from_dir(temp_dir.path());
        assert!(templates
            .render(FRONTPAGE_TEMPLATE, minijinja::context! {})
            .is_err());
    }
}
