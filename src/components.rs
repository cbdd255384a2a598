//! Reusable HTML components for page generation
//!
//! Maud component functions shared by the built-in page templates.

pub mod layout;
pub mod link_list;
pub mod nav;
