//! Metro route planner.
//!
//! Answers "how do I get from this station to that one?" on a fixed
//! multi-line transit network, preferring routes with fewer line changes.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
