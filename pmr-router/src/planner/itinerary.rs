//! Itinerary assembly: route search plus pricing.

use crate::domain::Itinerary;
use crate::index::{StationIndex, StationStore};

use super::bfs::RouteSolver;
use super::cancel::CancelToken;
use super::config::{RouteOptions, SearchConfig};
use super::fare::calculate_price;
use super::outcome::{RouteError, RouteOutcome};

/// Builds priced itineraries for the booking flow.
pub struct ItineraryAssembler<'a, S: StationStore> {
    solver: RouteSolver<'a, S>,
}

impl<'a, S: StationStore> ItineraryAssembler<'a, S> {
    pub fn new(index: &'a StationIndex<S>, config: &'a SearchConfig) -> Self {
        Self {
            solver: RouteSolver::new(index, config),
        }
    }

    /// Solve the route and price it.
    ///
    /// `StationNotFound` and `NoRouteFound` outcomes pass through unchanged.
    pub fn build_itinerary(
        &self,
        start: &str,
        end: &str,
        options: RouteOptions,
        cancel: &CancelToken,
    ) -> Result<RouteOutcome<Itinerary>, RouteError> {
        let path = match self.solver.find_optimal_route(start, end, options, cancel)? {
            RouteOutcome::Found(path) => path,
            RouteOutcome::StationNotFound(id) => return Ok(RouteOutcome::StationNotFound(id)),
            RouteOutcome::NoRouteFound => return Ok(RouteOutcome::NoRouteFound),
        };

        let price = calculate_price(&path.stations);
        let itinerary = Itinerary::new(path.stations, path.connections, price)?;
        Ok(RouteOutcome::Found(itinerary))
    }
}
