//! Console output rendering

pub mod console;
