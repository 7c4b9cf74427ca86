use chrono::NaiveDateTime;

pub const MAX_NAME_CHARS: usize = 15;
pub const MAX_MESSAGE_CHARS: usize = 50;

/// Header row expected in row 1 of the sheet.
pub const COLUMNS: [&str; 3] = ["Name", "Message", "Timestamp"];

/// Pattern used for the Timestamp column. The " CET" suffix is a literal
/// label, not derived from the offset.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %I:%M:%S %p CET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub message: String,
    pub posted_at: NaiveDateTime,
}

impl Entry {
    /// Parse a sheet row. The values API omits trailing empty cells, so
    /// missing cells read as empty strings.
    pub fn from_row(row: &[String]) -> Result<Self, chrono::ParseError> {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");

        Ok(Entry {
            name: cell(0).to_string(),
            message: cell(1).to_string(),
            posted_at: NaiveDateTime::parse_from_str(cell(2), TIMESTAMP_FMT)?,
        })
    }
}
