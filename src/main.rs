use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use guestbook::sheets::SheetsClient;
use guestbook::store::GuestbookStore;
use guestbook::{build_app, credentials};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let key = credentials::load_service_account_key()
        .expect("Failed to load Google service account credentials");
    let spreadsheet_id = std::env::var("GUESTBOOK_SPREADSHEET_ID")
        .expect("GUESTBOOK_SPREADSHEET_ID must be set");

    let sheet = SheetsClient::connect(key, &spreadsheet_id)
        .await
        .expect("Failed to open the guestbook spreadsheet");
    let store = GuestbookStore::new(Arc::new(sheet));

    let app = build_app(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = TcpListener::bind(addr).await.unwrap();

    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await.unwrap();
}
