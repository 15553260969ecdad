//! # Transaction Processor (SP-04)
//!
//! Applies one `ValidatedAction` to one store snapshot at a given height
//! and reports a `TxResult`. Check-validation and block application both
//! run through `Processor::apply`; they differ only in which snapshot is
//! passed in.

pub mod processor;

pub use processor::Processor;
