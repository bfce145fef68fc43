//! Wire shapes exchanged with the bank API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests themselves are issued by login/logout flows outside this crate;
//! `types` only defines what those flows hand to the auth store.

pub mod types;
