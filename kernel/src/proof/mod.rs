//! Proof module: canonical JSON and domain-separated hashing.
//!
//! Every digest in the workspace routes through [`hash::canonical_hash`],
//! and every JSON byte string that gets hashed routes through
//! [`canon::canonical_json_bytes`].

pub mod canon;
pub mod hash;
pub mod hash_domain;
