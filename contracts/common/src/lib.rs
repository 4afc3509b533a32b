//! Shared utilities for the staking contract suite.
//!
//! This crate provides:
//! - [`fixed_point`]: checked, truncating 1e18-scaled arithmetic used by the
//!   reward accrual and fee math.
//! - [`ttl`]: storage TTL policy and bump helpers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod fixed_point;
pub mod ttl;

pub use fixed_point::{MathError, SCALE};
