use thiserror::Error;

use crate::domain::ParseAmountError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Name must not be blank")]
    BlankName,

    #[error("Category must not be blank")]
    BlankCategory,

    #[error("Invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        #[source]
        source: ParseAmountError,
    },

    #[error("No entry at row {row} (the list has {len} entries)")]
    RowOutOfRange { row: usize, len: usize },
}
