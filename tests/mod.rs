//! Test suite for coursehub
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;
