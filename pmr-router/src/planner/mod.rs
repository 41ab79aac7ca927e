//! Route planning over the station graph.
//!
//! This module answers: "what is the best way from this station to that
//! one, for a traveller who may need step-free access?"
//!
//! The search is an explicit bounded BFS over simple paths;
//! results are priced by zone count and assembled into an
//! [`Itinerary`](crate::domain::Itinerary).

mod bfs;
mod cancel;
mod config;
mod fare;
mod itinerary;
mod outcome;

pub use bfs::{RouteSolver, SolvedPath, solve};
pub use cancel::CancelToken;
pub use config::{RouteOptions, SearchConfig};
pub use fare::{calculate_price, distinct_zones, price_for_zones};
pub use itinerary::ItineraryAssembler;
pub use outcome::{RouteError, RouteOutcome};
