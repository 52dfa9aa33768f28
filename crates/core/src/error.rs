use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Standard input and output must both be attached to an interactive terminal.")]
    NotATty,

    #[error("Terminal I/O error: {}", .0)]
    IoFailure(#[from] std::io::Error),

    #[error("There are no options to choose from.")]
    EmptyOptionSet,

    #[error("Invalid choice `{}`: enter a number from 1 to {}.", .input, .max)]
    InvalidFallbackInput { input: String, max: usize },

    #[error("Unrecognised confirmation default `{}`: expected yes/no, true/false or y/n.", .0)]
    InvalidConfirmDefault(String),

    #[error("Error reading {} file at `{}`: {}", .file_description, .path, .original)]
    Yaml {
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },
}

impl Error {
    pub fn invalid_fallback_input(input: &str, max: usize) -> Self {
        Self::InvalidFallbackInput {
            input: input.to_string(),
            max,
        }
    }

    pub fn yaml_error(file_description: String, path: String, original: serde_yaml::Error) -> Self {
        Self::Yaml {
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
