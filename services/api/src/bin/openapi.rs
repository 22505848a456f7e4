//! services/api/src/bin/openapi.rs
//!
//! Writes the OpenAPI document for every view and action to disk, so the
//! frontend can generate its client without starting the server.
//!
//! Usage: `openapi [OUTPUT_PATH]` (defaults to `openapi.json`).

use api_lib::web::rest::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "openapi.json".to_string());

    let doc = ApiDoc::openapi();
    std::fs::write(&path, doc.to_pretty_json()?)?;
    println!(
        "OpenAPI document with {} paths written to {}",
        doc.paths.paths.len(),
        path
    );
    Ok(())
}
