//! Property-based tests
//!
//! Uses proptest to generate random inputs and verify properties

mod header_proptest;
mod password_proptest;
mod token_proptest;
