//! Sliding-window pairing of sorted events into trips

use super::sort_key::sort_events;
use crate::Result;
use crate::app::models::{JourneyEvent, Trip, TripValidity};
use crate::config::SortOrder;
use tracing::{debug, warn};

/// Pairs adjacent events of the same bike into trips
///
/// Precondition: once sorted, each bike's departure sits immediately before
/// its next arrival. Violations are not corrected; they surface as trips
/// flagged [`TripValidity::NegativeDuration`] or as a missing-timestamp error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripPairer {
    sort_order: SortOrder,
}

impl TripPairer {
    pub fn new(sort_order: SortOrder) -> Self {
        Self { sort_order }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Sort the events and pair every adjacent window sharing a bike
    ///
    /// Fails on the first window whose earlier departure or later arrival is
    /// missing.
    pub fn pair(&self, mut events: Vec<JourneyEvent>) -> Result<Vec<Trip>> {
        sort_events(&mut events, self.sort_order);

        let mut trips = Vec::new();
        for window in events.windows(2) {
            let (earlier, later) = (&window[0], &window[1]);

            let Some(trip) = Trip::between(earlier, later)? else {
                continue;
            };

            if trip.validity() == TripValidity::NegativeDuration {
                warn!(
                    "Bike {} arrives before it departs (lines {} and {}): {} seconds",
                    trip.bike_id(),
                    earlier.line(),
                    later.line(),
                    trip.duration_seconds()
                );
            } else {
                debug!(
                    "Bike {} trip from station {}: {} seconds",
                    trip.bike_id(),
                    trip.station_id(),
                    trip.duration_seconds()
                );
            }

            trips.push(trip);
        }

        Ok(trips)
    }
}
