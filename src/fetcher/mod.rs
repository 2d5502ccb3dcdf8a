pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

#[cfg(test)]
pub use client::MockPageFetcher;
pub use client::{HttpFetcher, PageFetcher};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
