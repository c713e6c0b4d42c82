//! Loading indicators for store operations

pub mod reporter;
