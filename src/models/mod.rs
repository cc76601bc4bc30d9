//! Wire-level data structures.
//!
//! Every response body the server produces is one of these shapes.

/// JSON response envelopes
pub mod response;
