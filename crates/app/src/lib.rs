//! # nesthub-app
//!
//! Application layer — **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven/outbound port** adapters implement to reach the
//!   vendor cloud: [`ports::DeviceDataProvider`]
//! - Define the **driving/inbound port** the host platform uses to talk to a
//!   device integration: [`ports::Integration`]
//!
//! ## Dependency rule
//! Depends on `nesthub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
