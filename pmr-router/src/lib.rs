//! Accessibility-aware station routing engine.
//!
//! Indexes stations and the connections between them, finds stations by
//! distance or name, and plans routes for travellers with reduced
//! mobility: bounded search over accessible stations and connections,
//! priced by fare zone.

pub mod config;
pub mod domain;
pub mod index;
pub mod planner;
pub mod search;
pub mod seed;
pub mod web;
