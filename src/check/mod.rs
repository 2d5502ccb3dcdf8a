pub mod dtos;
pub mod handlers;

pub use dtos::{CheckQuery, ErrorResponse};
