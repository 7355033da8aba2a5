//! Command implementations for the KSIM CLI

pub mod scan;
