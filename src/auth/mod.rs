//! Login/logout handlers and the pieces they are built from.
//!
//! ARCHITECTURE
//! ============
//! `form` collects the request payload, `outcome` turns a reply into a
//! navigation or a notification, and `handlers` runs one request per user
//! action against the `Transport`/`Browser` seams.

pub mod form;
pub mod handlers;
pub mod outcome;
