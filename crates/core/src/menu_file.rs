//! Menu definitions stored as YAML.
//!
//! A definition file looks like:
//!
//! ```yaml
//! prompt: "Which shell?"
//! default: 1
//! options:
//!   - bash
//!   - zsh
//!   - fish
//! ```
//!
//! `prompt` and `default` are optional.

use std::fs::File;

use log::debug;
use serde::Deserialize;

use crate::config::expand_menu_path;
use crate::error::{Error, Result};

const FILE_DESCRIPTION: &str = "menu definition";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuDefinition {
    pub prompt: Option<String>,
    pub options: Vec<String>,
    #[serde(default)]
    pub default: usize,
}

fn get_reader(path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(FILE_DESCRIPTION.to_string(), path.to_string(), e))
}

/// Loads a menu definition, expanding `~` in `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The YAML is malformed or has unknown fields
/// - The definition has no options
///
/// # Examples
///
/// ```no_run
/// use term_select_core::menu_file::load_menu_definition;
///
/// let menu = load_menu_definition("~/menus/shells.yml")?;
/// println!("{} options", menu.options.len());
/// # Ok::<(), term_select_core::error::Error>(())
/// ```
pub fn load_menu_definition(path: &str) -> Result<MenuDefinition> {
    let path = expand_menu_path(path);
    let reader = get_reader(&path)?;

    let definition: MenuDefinition = serde_yaml::from_reader(reader)
        .map_err(|e| Error::yaml_error(FILE_DESCRIPTION.to_string(), path.clone(), e))?;

    if definition.options.is_empty() {
        return Err(Error::EmptyOptionSet);
    }

    debug!(
        "Loaded {} options from menu definition at `{path}`",
        definition.options.len()
    );
    Ok(definition)
}
