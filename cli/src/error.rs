use pixel_sorter_lib::{FileError, SortError};
use thiserror::Error;

use crate::session::SessionError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error loading image: {0}")]
    Load(FileError),

    #[error("Failed to sort the image: {0}")]
    Sort(#[from] SortError),

    #[error("Save Error: {0}")]
    Save(FileError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Logger setup error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
