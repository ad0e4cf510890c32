use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct VersionInfo {
    version: &'static str,
}

pub async fn version() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
    })
}
