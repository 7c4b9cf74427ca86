use async_trait::async_trait;
use google_sheets4::{api::ValueRange, hyper, hyper_rustls, oauth2, Sheets};
use serde_json::Value;

type SheetsHub = Sheets<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

#[derive(Debug)]
pub enum SheetError {
    Api(google_sheets4::Error),
    Auth(std::io::Error),
    NoFirstSheet,
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetError::Api(e) => write!(f, "sheets API error: {e}"),
            SheetError::Auth(e) => write!(f, "service account auth failed: {e}"),
            SheetError::NoFirstSheet => write!(f, "spreadsheet has no first sheet"),
        }
    }
}

impl std::error::Error for SheetError {}

/// Row-level access to the guestbook sheet. The store only ever appends one
/// row or reads them all, so that is the whole surface.
#[async_trait]
pub trait SheetRows: Send + Sync {
    async fn append_row(&self, row: Vec<String>) -> Result<(), SheetError>;
    async fn rows(&self) -> Result<Vec<Vec<String>>, SheetError>;
}

/// Google Sheets-backed implementation over the first sheet of one
/// spreadsheet document.
pub struct SheetsClient {
    hub: SheetsHub,
    spreadsheet_id: String,
    range: String,
}

impl SheetsClient {
    /// Authenticate and resolve the first sheet's title so later calls can
    /// address it in A1 notation.
    pub async fn connect(
        key: oauth2::ServiceAccountKey,
        spreadsheet_id: &str,
    ) -> Result<Self, SheetError> {
        let client = hyper::Client::builder().build(
            hyper_rustls::HttpsConnectorBuilder::new()
                .with_native_roots()
                .map_err(SheetError::Auth)?
                .https_or_http()
                .enable_http1()
                .build(),
        );

        let auth = oauth2::ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(SheetError::Auth)?;

        let hub = Sheets::new(client, auth);

        let response = hub
            .spreadsheets()
            .get(spreadsheet_id)
            .doit()
            .await
            .map_err(SheetError::Api)?;

        let title = response
            .1
            .sheets
            .and_then(|sheets| sheets.into_iter().next())
            .and_then(|sheet| sheet.properties)
            .and_then(|props| props.title)
            .ok_or(SheetError::NoFirstSheet)?;

        Ok(SheetsClient {
            hub,
            spreadsheet_id: spreadsheet_id.to_string(),
            range: format!("'{title}'!A:C"),
        })
    }
}

fn cell_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[async_trait]
impl SheetRows for SheetsClient {
    async fn append_row(&self, row: Vec<String>) -> Result<(), SheetError> {
        let values = ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(vec![row.into_iter().map(Value::String).collect()]),
        };

        self.hub
            .spreadsheets()
            .values_append(values, &self.spreadsheet_id, &self.range)
            .value_input_option("RAW")
            .insert_data_option("INSERT_ROWS")
            .doit()
            .await
            .map(|_| ())
            .map_err(SheetError::Api)
    }

    async fn rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, &self.range)
            .doit()
            .await
            .map_err(SheetError::Api)?;

        let values = response.1.values.unwrap_or_default();
        Ok(values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_to_string_unquotes_strings() {
        assert_eq!(cell_to_string(Value::String("Sven".into())), "Sven");
        // A numeric cell still becomes display text rather than JSON
        assert_eq!(cell_to_string(Value::from(42)), "42");
    }
}
