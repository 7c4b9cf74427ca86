use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::{Tz, CET};

use crate::error::AppError;
use crate::models::{Entry, COLUMNS, TIMESTAMP_FMT};
use crate::sheets::SheetRows;

fn cet_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&CET)
}

/// Domain wrapper around the guestbook sheet: stamps submissions on the way
/// in, parses rows on the way out.
pub struct GuestbookStore {
    sheet: Arc<dyn SheetRows>,
}

impl GuestbookStore {
    pub fn new(sheet: Arc<dyn SheetRows>) -> Self {
        GuestbookStore { sheet }
    }

    pub async fn add_message(&self, name: &str, message: &str) -> Result<(), AppError> {
        let timestamp = cet_now().format(TIMESTAMP_FMT).to_string();
        self.sheet
            .append_row(vec![name.to_string(), message.to_string(), timestamp])
            .await?;
        Ok(())
    }

    /// Fetch every entry in sheet order. The first row must be the header;
    /// an empty sheet yields an empty list.
    pub async fn get_messages(&self) -> Result<Vec<Entry>, AppError> {
        let rows = self.sheet.rows().await?;
        let mut rows = rows.into_iter();

        let Some(header) = rows.next() else {
            return Ok(Vec::new());
        };
        if header != COLUMNS {
            return Err(AppError::BadHeader(header));
        }

        rows.map(|row| Entry::from_row(&row).map_err(AppError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn stamp_round_trips_through_the_wire_pattern() {
        let stamped = cet_now().format(TIMESTAMP_FMT).to_string();
        assert!(stamped.ends_with(" CET"));
        NaiveDateTime::parse_from_str(&stamped, TIMESTAMP_FMT)
            .expect("freshly stamped timestamp parses back");
    }
}
