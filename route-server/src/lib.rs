//! Transit route server.
//!
//! Loads a network of stations and line segments from an edge table and
//! answers "how do I get from here to there" by shortest distance, quickest
//! time or fewest line changes, with a distance-based fare.

pub mod cache;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod fare;
pub mod network;
pub mod planner;
pub mod web;
