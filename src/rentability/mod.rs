//! Pool rentability (APR) estimation

pub mod calculator;

pub use calculator::*;
