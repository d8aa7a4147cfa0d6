//! # sat-core
//!
//! Core types for satwatch, the Space-Track collision-avoidance extractor.
//!
//! This crate holds everything that does not touch the network:
//! - Provider credentials
//! - Fixed-schema records for element sets and conjunction events
//! - The field filter that maps loosely-typed provider records onto them
//! - The aggregator that combines the three categories into a [`ResultBundle`]
//! - Risk-bucket statistics over conjunction events

pub mod bundle;
pub mod credentials;
pub mod filter;
pub mod records;
pub mod report;
pub mod risk;

pub use bundle::{ExtractionMetadata, ResultBundle};
pub use credentials::Credentials;
pub use records::{
    ActiveObjectRecord, Category, ConjunctionRecord, DebrisRecord, ElementSetRecord, RawRecord,
};
pub use report::ExtractionReport;
pub use risk::{RiskLevel, RiskSummary};
