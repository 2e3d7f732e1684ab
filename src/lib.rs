//! VIKOR - Multi-criteria compromise ranking
//!
//! This crate ranks a finite set of alternatives scored on several
//! criteria with the VIKOR method: it finds the best and worst value per
//! criterion, computes group utility (S), individual regret (R) and the
//! compromise index (Q), and orders alternatives by ascending Q.
//!
//! The engine lives in `domain`; rendering and persistence of reports sit
//! behind the traits in `ports` with implementations in `adapters`.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
