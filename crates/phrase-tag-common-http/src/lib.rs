//! HTTP client utilities for phrase-tag.

pub mod client;
pub mod request;
pub mod response;

pub use client::{build_client, HttpClient, HttpConfig, HttpError};
pub use request::{headers, without_empty, Params, RequestBuilder};
pub use response::{parse_json, read_body, ResponseError};
