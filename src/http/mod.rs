mod client;

pub use client::{classify_status, JsonClient};
