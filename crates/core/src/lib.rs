//! Transport-agnostic pieces of the JSON helper: the strict codec, the
//! response envelopes, and the error taxonomy.

pub mod codec;
pub mod envelope;
pub mod error;
