//! Assembling the menu to show from arguments and an optional menu file.

use log::debug;
use term_select_core::config::DEFAULT_MENU_PROMPT;
use term_select_core::error::{Error, Result};
use term_select_core::menu_file::load_menu_definition;

use crate::cli_args::MenuArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRequest {
    pub prompt: String,
    pub options: Vec<String>,
    pub default_index: usize,
}

impl MenuRequest {
    /// Builds the request, reading the menu file first when one is given.
    ///
    /// Command-line values win over the file's: the prompt and default are
    /// replaced, options are appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu file cannot be loaded, or if neither the
    /// file nor the command line provides any option.
    pub fn from_args(args: &MenuArgs) -> Result<Self> {
        let (file_prompt, mut options, file_default) = match &args.file {
            Some(path) => {
                let definition = load_menu_definition(path)?;
                (definition.prompt, definition.options, definition.default)
            }
            None => (None, Vec::new(), 0),
        };

        options.extend(args.options.iter().cloned());
        if options.is_empty() {
            return Err(Error::EmptyOptionSet);
        }

        let prompt = args
            .prompt
            .clone()
            .or(file_prompt)
            .unwrap_or_else(|| DEFAULT_MENU_PROMPT.to_string());
        let default_index = args.default.unwrap_or(file_default);

        debug!(
            "Menu with {} options, starting at {default_index}",
            options.len()
        );
        Ok(Self {
            prompt,
            options,
            default_index,
        })
    }
}
