//! Unit tests for pev-nav.

use pev_core::{Destination, Direction, PevId, Position};

use crate::{Connectivity, FixedPositionFeed, Instruction, NavigationEngine};

// ── Helpers ───────────────────────────────────────────────────────────────────

const PEV: PevId = PevId(1);

/// Engine over a feed reporting exactly one vehicle at the given position.
fn engine_at(x: i64, y: i64, heading: Option<Direction>) -> NavigationEngine<FixedPositionFeed> {
    let mut feed = FixedPositionFeed::new();
    feed.place(PEV, Position::new(x, y, heading));
    NavigationEngine::new(feed)
}

/// Engine over an empty feed — every vehicle reads as `(0, 0, None)`.
fn disconnected_engine() -> NavigationEngine<FixedPositionFeed> {
    NavigationEngine::new(FixedPositionFeed::new())
}

// ── Instructions ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod instructions {
    use super::*;

    #[test]
    fn lost_connection_short_circuits_for_any_destination() {
        let eng = disconnected_engine();
        for dest in [
            Destination::new(5, 10, "Home"),
            Destination::new(0, 0, "Depot"),
            Destination::new(-3, 7, "Office"),
        ] {
            let inst = eng.instructions(PEV, &dest);
            assert_eq!(inst, Instruction::ConnectionLost);
            assert_eq!(inst.to_string(), "connection lost");
        }
    }

    #[test]
    fn origin_with_known_heading_is_not_a_lost_connection() {
        // Only the full (0, 0, None) sentinel means "no telemetry" — a
        // vehicle genuinely parked at the origin still navigates.
        let eng = engine_at(0, 0, Some(Direction::North));
        let dest = Destination::new(0, 5, "Home");
        assert_eq!(
            eng.instructions(PEV, &dest),
            Instruction::Drive { heading: Direction::North, distance_km: 5 }
        );
    }

    #[test]
    fn destination_reached_on_exact_match() {
        let eng = engine_at(5, 10, Some(Direction::North));
        let dest = Destination::new(5, 10, "Home");
        let inst = eng.instructions(PEV, &dest);
        assert_eq!(inst, Instruction::DestinationReached);
        assert_eq!(inst.to_string(), "destination reached");
    }

    #[test]
    fn south_of_target_driving_south() {
        let eng = engine_at(5, 15, Some(Direction::South));
        let dest = Destination::new(5, 10, "Office");
        let inst = eng.direction_distance(PEV, &dest);
        assert_eq!(inst.to_string(), "drive south for 5 more kilometers");
    }

    #[test]
    fn single_axis_steps_all_four_directions() {
        let dest = Destination::new(0, 0, "Depot");
        let cases = [
            (0, -4, "drive north for 4 more kilometers"),
            (0, 9, "drive south for 9 more kilometers"),
            (-7, 0, "drive east for 7 more kilometers"),
            (3, 0, "drive west for 3 more kilometers"),
        ];
        for (x, y, expected) in cases {
            // Heading deliberately orthogonal or opposed: a single off-axis
            // leaves no choice to make.
            let eng = engine_at(x, y, Some(Direction::North));
            assert_eq!(eng.instructions(PEV, &dest).to_string(), expected, "from ({x}, {y})");
        }
    }

    #[test]
    fn instructions_and_direction_distance_agree_en_route() {
        let eng = engine_at(2, 3, Some(Direction::East));
        let dest = Destination::new(8, 3, "Home");
        assert_eq!(eng.instructions(PEV, &dest), eng.direction_distance(PEV, &dest));
    }

    #[test]
    fn repeated_calls_with_unchanged_feed_are_identical() {
        let eng = engine_at(5, 15, Some(Direction::South));
        let dest = Destination::new(5, 10, "Office");
        let first = eng.instructions(PEV, &dest);
        for _ in 0..3 {
            assert_eq!(eng.instructions(PEV, &dest), first);
        }
    }

    #[test]
    fn feed_is_resampled_on_every_call() {
        let mut feed = FixedPositionFeed::new();
        feed.place(PEV, Position::new(5, 15, Some(Direction::South)));
        let mut eng = NavigationEngine::new(feed);
        let dest = Destination::new(5, 10, "Office");

        assert_eq!(eng.instructions(PEV, &dest).to_string(), "drive south for 5 more kilometers");

        // The vehicle arrives; the next call must see the fresh position.
        eng.feed.place(PEV, Position::new(5, 10, Some(Direction::South)));
        assert_eq!(eng.instructions(PEV, &dest), Instruction::DestinationReached);

        // And a dropped link must surface immediately.
        eng.feed.disconnect(PEV);
        assert_eq!(eng.instructions(PEV, &dest), Instruction::ConnectionLost);
    }
}

// ── Tie-break between axes ────────────────────────────────────────────────────

#[cfg(test)]
mod tie_break {
    use super::*;

    #[test]
    fn facing_axis_wins_when_both_axes_are_off() {
        let dest = Destination::new(5, 10, "Home");

        // From (9, 4) the target needs 4 km west and 6 km north; the axis
        // the vehicle already faces down decides.
        let eng = engine_at(9, 4, Some(Direction::North));
        assert_eq!(
            eng.direction_distance(PEV, &dest),
            Instruction::Drive { heading: Direction::North, distance_km: 6 }
        );

        let eng = engine_at(9, 4, Some(Direction::West));
        assert_eq!(
            eng.direction_distance(PEV, &dest),
            Instruction::Drive { heading: Direction::West, distance_km: 4 }
        );
    }

    #[test]
    fn unhelpful_heading_falls_back_to_larger_delta() {
        // Needs 4 west and 6 north, but faces south: neither axis is aligned,
        // so the larger delta (Y) wins.
        let eng = engine_at(9, 4, Some(Direction::South));
        let dest = Destination::new(5, 10, "Home");
        assert_eq!(
            eng.direction_distance(PEV, &dest),
            Instruction::Drive { heading: Direction::North, distance_km: 6 }
        );
    }

    #[test]
    fn unknown_heading_falls_back_to_larger_delta() {
        let dest = Destination::new(0, 0, "Depot");

        let eng = engine_at(2, 9, None);
        assert_eq!(
            eng.direction_distance(PEV, &dest),
            Instruction::Drive { heading: Direction::South, distance_km: 9 }
        );

        let eng = engine_at(-9, 2, None);
        assert_eq!(
            eng.direction_distance(PEV, &dest),
            Instruction::Drive { heading: Direction::East, distance_km: 9 }
        );
    }

    #[test]
    fn exact_delta_tie_prefers_y_axis() {
        let eng = engine_at(3, 3, None);
        let dest = Destination::new(0, 0, "Depot");
        assert_eq!(
            eng.direction_distance(PEV, &dest),
            Instruction::Drive { heading: Direction::South, distance_km: 3 }
        );
    }

    #[test]
    fn direction_distance_on_matching_coordinates_reports_arrival() {
        let eng = engine_at(5, 10, Some(Direction::North));
        let dest = Destination::new(5, 10, "Home");
        assert_eq!(eng.direction_distance(PEV, &dest), Instruction::DestinationReached);
    }
}

// ── Connectivity ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod connectivity {
    use super::*;

    #[test]
    fn all_values_present_is_correctly_connected() {
        let eng = engine_at(5, 10, Some(Direction::North));
        let diag = eng.connectivity(PEV);
        assert_eq!(diag, Connectivity::Connected);
        assert_eq!(diag.to_string(), "correctly connected");
    }

    #[test]
    fn unconfigured_vehicle_has_a_connection_problem() {
        let eng = disconnected_engine();
        let diag = eng.connectivity(PEV);
        assert_eq!(diag, Connectivity::ConnectionProblem);
        assert_eq!(diag.to_string(), "connection problem");
    }

    #[test]
    fn any_zero_or_missing_reading_is_a_problem() {
        for (x, y, heading) in [
            (0, 10, Some(Direction::North)),
            (5, 0, Some(Direction::North)),
            (5, 10, None),
        ] {
            let eng = engine_at(x, y, heading);
            assert_eq!(eng.connectivity(PEV), Connectivity::ConnectionProblem);
        }
    }
}
