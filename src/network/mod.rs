//! HTTP layer for talking to the search API

mod client;

pub use client::{ApiResponse, HttpClient};
