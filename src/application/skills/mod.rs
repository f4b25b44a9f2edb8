//! Skill handlers, grouped by concern. Pure formatting helpers live beside
//! the handlers that use them and are tested without any I/O.

pub mod defi;
pub mod domains;
pub mod help;
pub mod suggest;
