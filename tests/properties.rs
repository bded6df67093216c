//! Property tests for ctc.
//!
//! Randomized inputs guard the `.libname` codec and descriptor merge
//! invariants: round-trips, dedup and user-section preservation.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/entry_codec.rs"]
mod entry_codec;

#[path = "properties/descriptor.rs"]
mod descriptor;
