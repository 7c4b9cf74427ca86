pub mod entry;

pub use entry::{Entry, COLUMNS, MAX_MESSAGE_CHARS, MAX_NAME_CHARS, TIMESTAMP_FMT};
