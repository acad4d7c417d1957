//! Terminal front end: printing and session-script parsing. Not part of the lib API.

pub(crate) mod print;
pub(crate) mod session;
