//! Utility modules for bookstats
//!
//! This module contains utility functions for file loading and report
//! formatting.

pub mod file_utils;
pub mod output_formatter;
