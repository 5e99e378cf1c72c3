use std::fmt;

use serde::Serialize;

use super::stop_index::{StopIndex, StopRecord};

/// Which end of the stop-count ranking to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Extremum {
    Most,
    Fewest,
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Extremum::Most => write!(f, "longest"),
            Extremum::Fewest => write!(f, "shortest"),
        }
    }
}

/// Picks the route with the most or fewest stops.
///
/// Ties go to the route that comes first. `None` when there are no routes.
pub fn route_by_stop_count<S, I>(counts: I, extremum: Extremum) -> Option<(S, usize)>
where
    I: IntoIterator<Item = (S, usize)>,
{
    let mut best: Option<(S, usize)> = None;
    for (route, count) in counts {
        let replaces = match &best {
            None => true,
            Some((_, best_count)) => match extremum {
                Extremum::Most => count > *best_count,
                Extremum::Fewest => count < *best_count,
            },
        };
        if replaces {
            best = Some((route, count));
        }
    }
    best
}

/// Stops served by more than one route, in the order they were indexed.
pub fn transfer_stations(stops: &StopIndex) -> impl Iterator<Item = &StopRecord> {
    stops.values().filter(|stop| stop.is_transfer())
}

#[cfg(test)]
mod tests {
    use crate::network::stop_index::IndexBuilder;

    use super::*;

    #[test]
    fn single_route_count() {
        let counts = vec![("Red Line", ["s1", "s2"].len())];
        assert_eq!(
            route_by_stop_count(counts, Extremum::Most),
            Some(("Red Line", 2))
        );
    }

    #[test]
    fn most_and_fewest() {
        let counts = vec![("Red Line", 2), ("Orange Line", 1), ("Blue Line", 12)];
        assert_eq!(
            route_by_stop_count(counts.clone(), Extremum::Most),
            Some(("Blue Line", 12))
        );
        assert_eq!(
            route_by_stop_count(counts, Extremum::Fewest),
            Some(("Orange Line", 1))
        );
    }

    #[test]
    fn ties_go_to_first_route() {
        let counts = vec![("Red Line", 3), ("Orange Line", 3), ("Blue Line", 3)];
        assert_eq!(
            route_by_stop_count(counts.clone(), Extremum::Most),
            Some(("Red Line", 3))
        );
        assert_eq!(
            route_by_stop_count(counts, Extremum::Fewest),
            Some(("Red Line", 3))
        );
    }

    #[test]
    fn zero_stop_routes_still_count() {
        let counts = vec![("Ghost Line", 0), ("Red Line", 2)];
        assert_eq!(
            route_by_stop_count(counts, Extremum::Fewest),
            Some(("Ghost Line", 0))
        );
    }

    #[test]
    fn no_routes() {
        let counts: Vec<(String, usize)> = Vec::new();
        assert_eq!(route_by_stop_count(counts.clone(), Extremum::Most), None);
        assert_eq!(route_by_stop_count(counts, Extremum::Fewest), None);
    }

    #[test]
    fn transfers_are_multi_route_stops() {
        let mut builder = IndexBuilder::stops_only();
        builder.add_route("Red Line", ["Alewife", "Park Street", "Downtown Crossing"]);
        builder.add_route("Orange Line", ["Oak Grove", "Downtown Crossing"]);
        builder.add_route("Green Line-B", ["Park Street"]);
        let index = builder.finish();

        let transfers: Vec<_> = transfer_stations(&index.stops)
            .map(|stop| (stop.name.as_str(), stop.routes.clone()))
            .collect();
        assert_eq!(
            transfers,
            vec![
                (
                    "Park Street",
                    vec!["Red Line".to_string(), "Green Line-B".to_string()]
                ),
                (
                    "Downtown Crossing",
                    vec!["Red Line".to_string(), "Orange Line".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn extremum_labels() {
        assert_eq!(Extremum::Most.to_string(), "longest");
        assert_eq!(Extremum::Fewest.to_string(), "shortest");
    }
}
