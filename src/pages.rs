//! Built-in page templates
//!
//! One maud template per page type. Each is a plain function from its
//! context to markup, so it can be used wherever a
//! [`Template`](crate::Template) is expected.

pub mod daily;
pub mod frame;
pub mod index;
pub mod monthly;
pub mod years;
