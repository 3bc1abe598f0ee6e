//! `GET /`: liveness message.

use axum::Json;
use chrono::Local;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Status {
  pub message: String,
}

pub async fn root() -> Json<Status> {
  let now = Local::now();
  Json(Status {
    message: format!("Status: Ready. The time is {}", now.format("%Y-%m-%d %H:%M:%S %Z")),
  })
}
