pub mod convert;
pub mod download;
pub mod dtos;
pub mod error;
pub mod models;
pub mod persistence;
pub mod util;
