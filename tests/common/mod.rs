use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;

use guestbook::build_app;
use guestbook::models::COLUMNS;
use guestbook::sheets::{SheetError, SheetRows};
use guestbook::store::GuestbookStore;

/// In-memory stand-in for the remote sheet.
pub struct MemorySheet {
    rows: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl SheetRows for MemorySheet {
    async fn append_row(&self, row: Vec<String>) -> Result<(), SheetError> {
        self.rows.lock().unwrap().push(row);
        Ok(())
    }

    async fn rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

impl MemorySheet {
    pub fn rows_snapshot(&self) -> Vec<Vec<String>> {
        self.rows.lock().unwrap().clone()
    }
}

/// Build a data row the way the store writes them.
pub fn entry_row(name: &str, message: &str, timestamp: &str) -> Vec<String> {
    vec![name.to_string(), message.to_string(), timestamp.to_string()]
}

pub fn header_row() -> Vec<String> {
    COLUMNS.iter().map(|c| c.to_string()).collect()
}

pub struct TestApp {
    pub router: Router,
    pub sheet: Arc<MemorySheet>,
}

impl TestApp {
    /// Fresh app over a sheet holding only the header row.
    pub fn new() -> Self {
        Self::with_rows(vec![header_row()])
    }

    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        let sheet = Arc::new(MemorySheet {
            rows: Mutex::new(rows),
        });
        let store = GuestbookStore::new(sheet.clone());
        let router = build_app(store);
        Self { router, sheet }
    }

    /// Send a request through the app and return the response.
    pub async fn request(&self, req: Request<Body>) -> Response {
        tower::ServiceExt::oneshot(self.router.clone(), req)
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.request(req).await
    }

    /// Send a POST with a urlencoded form body.
    pub async fn post_form(&self, uri: &str, body: &str) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(req).await
    }
}

/// Read the full response body as a String.
pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
