//! Response envelopes shared by several handlers.

use serde::Serialize;

/// `{"data": [...]}`: the envelope used by every listing endpoint.
#[derive(Debug, Serialize)]
pub struct Data<T> {
  pub data: Vec<T>,
}

impl<T> From<Vec<T>> for Data<T> {
  fn from(data: Vec<T>) -> Self { Self { data } }
}

/// `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct Message {
  pub message: &'static str,
}

impl Message {
  pub const fn new(message: &'static str) -> Self { Self { message } }
}
