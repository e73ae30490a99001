//! Decision Compass - Risk-aware multi-criteria decision scoring
//!
//! This crate scores candidate options against weighted criteria whose
//! outcomes are uncertain (best / expected / worst estimates), using a
//! pluggable risk-adjustment strategy.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
