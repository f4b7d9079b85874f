//! Harness for end-to-end checks against a running site server.

pub mod browser;
