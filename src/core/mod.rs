//! Core module for book analysis
//!
//! This module contains the word and character counters and the ranking
//! applied to their results.

pub mod analyzer;
pub mod ranking;
