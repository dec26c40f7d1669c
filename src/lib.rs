//! Library surface for `userdb`, a user record store backed by a single
//! JSON file.

pub mod actions;
pub mod cli;
pub mod store;
