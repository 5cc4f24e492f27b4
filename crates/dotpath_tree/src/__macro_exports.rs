//! Re-exports used by macro-generated code. Not public API.

pub use alloc::string::String;
