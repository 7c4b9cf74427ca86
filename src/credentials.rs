use std::env;
use std::fs;

use google_sheets4::oauth2::{self, ServiceAccountKey};

const CREDENTIALS_FILE: &str = "credentials.json";

/// Load the Google service account key: the GOOGLE_CREDENTIALS variable
/// holds the JSON blob when set, otherwise a local credentials.json is read.
pub fn load_service_account_key() -> Result<ServiceAccountKey, Box<dyn std::error::Error>> {
    let json = match env::var("GOOGLE_CREDENTIALS") {
        Ok(value) => value,
        Err(_) => fs::read_to_string(CREDENTIALS_FILE)?,
    };
    Ok(oauth2::parse_service_account_key(json)?)
}
