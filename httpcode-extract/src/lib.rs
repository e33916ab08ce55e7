pub mod error;
pub mod extractor;

pub use error::ExtractError;
pub use extractor::{
    MAX_DESCRIPTION_WORDS, StatusMap, extract_file_lossy, extract_from_file, extract_lossy,
    extract_status_codes, normalize_whitespace, truncate_words,
};
