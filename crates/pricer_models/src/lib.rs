//! # Pricer Models (L2: Business Logic)
//!
//! Turns a market snapshot into the scalar inputs of the pricing engine.
//!
//! This crate provides:
//! - Option-chain snapshot types ([`calibration::MarketSnapshot`])
//! - At-the-money strike and nearest-expiry selection
//! - Implied volatility conversion and time-to-maturity computation
//!
//! ## Design Principles
//!
//! - **Pure functions**: calibration reads a snapshot and returns a value,
//!   nothing is cached between calls
//! - **Explicit rules**: tie-breaking and day counts are fixed and documented
//!   rather than inherited from input ordering

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calibration;
