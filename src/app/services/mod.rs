//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Text metrics for the status bar and timestamp insertion
//! - PDF text extraction
//! - Speech synthesis

pub mod pdf;
pub mod speech;
pub mod text_metrics;
