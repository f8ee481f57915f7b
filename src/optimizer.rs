//! Greedy constructive route optimizer.
//!
//! Builds the day's visit order one stop at a time: every unvisited
//! appointment is scored against the current position and projected clock,
//! the best candidate is appended, and the clock advances by travel plus
//! on-site time. O(n²) over a day's appointments (typically under 25).
//! Deliberately a greedy heuristic, not a global optimum.
//!
//! Each call is a pure recomputation from its inputs; nothing persists
//! between invocations, and the computation never fails for well-typed
//! input.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::distance::{HaversineEstimator, distance_matrix};
use crate::model::{Appointment, ClockTime, OptimizedRoute};
use crate::priority::PriorityConfig;
use crate::score::{CandidateScore, ScoreContext, compare_candidates, score_candidate};
use crate::traits::TravelEstimator;

/// Knobs for a single optimization pass.
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Clock time the agent starts the day. The leg from this virtual
    /// start to the first stop costs no distance and no travel time.
    pub day_start: ClockTime,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            day_start: ClockTime::new(9, 0),
        }
    }
}

/// Computes the visit order for one date with the default haversine
/// estimator and options.
///
/// The caller supplies the day's appointment snapshots and the active
/// priority config; the optimizer fetches nothing itself.
pub fn compute_route(
    date: &str,
    appointments: &[Appointment],
    config: &PriorityConfig,
) -> OptimizedRoute {
    optimize(
        date,
        appointments,
        config,
        &HaversineEstimator::default(),
        OptimizeOptions::default(),
    )
}

/// Full-control entry point: explicit estimator and options.
pub fn optimize<E>(
    date: &str,
    appointments: &[Appointment],
    config: &PriorityConfig,
    estimator: &E,
    options: OptimizeOptions,
) -> OptimizedRoute
where
    E: TravelEstimator + Sync,
{
    if appointments.is_empty() {
        return OptimizedRoute {
            appointments: Vec::new(),
            total_estimated_time: 0,
            total_distance_estimate: 0.0,
            finish_time_estimate: options.day_start,
            missing_coordinates: Vec::new(),
        };
    }

    let config = config.clone().normalized();
    let coords: Vec<_> = appointments.iter().map(Appointment::coords).collect();
    let matrix = distance_matrix(estimator, &coords);

    let n = appointments.len();
    let mut visited = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    // None = the virtual day start; distance and city clustering are inert
    // for the first pick.
    let mut current: Option<usize> = None;
    let mut clock = f64::from(options.day_start.minutes());
    let mut open_house_visited = false;
    let mut total_travel_minutes = 0.0;
    let mut total_miles = 0.0;
    let mut total_on_site: u32 = 0;
    let mut missing: Vec<String> = Vec::new();

    while order.len() < n {
        let context = ScoreContext {
            clock_minutes: clock,
            previous_city: current.map(|i| appointments[i].city.as_str()),
            open_house_visited,
        };

        let mut best: Option<(usize, CandidateScore)> = None;
        for (idx, candidate) in appointments.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            let leg = current.map(|from| &matrix[from][idx]);
            let score = score_candidate(candidate, leg, &context, &config);
            let replace = match &best {
                Some((best_idx, best_score)) => {
                    compare_candidates(
                        (candidate, &score),
                        (&appointments[*best_idx], best_score),
                    ) == Ordering::Less
                }
                None => true,
            };
            if replace {
                best = Some((idx, score));
            }
        }

        let Some((chosen, score)) = best else {
            break;
        };
        let appointment = &appointments[chosen];
        debug!(
            stop = appointment.id.as_str(),
            total = score.total,
            "selected next stop"
        );

        if let Some(from) = current {
            let leg = &matrix[from][chosen];
            let travel = estimator.travel_minutes(leg.miles);
            total_miles += leg.miles;
            total_travel_minutes += travel;
            clock += travel;
        }

        if appointment.coords().is_none() {
            warn!(
                stop = appointment.id.as_str(),
                address = appointment.property_address.as_str(),
                "no validated coordinates, legs use the fallback distance"
            );
            missing.push(appointment.id.clone());
        }

        clock += f64::from(appointment.time_at_house);
        total_on_site += appointment.time_at_house;
        if appointment.is_open_house {
            open_house_visited = true;
        }
        visited[chosen] = true;
        order.push(chosen);
        current = Some(chosen);
    }

    let total_minutes = total_on_site + total_travel_minutes.round() as u32;
    let routed = order
        .iter()
        .enumerate()
        .map(|(position, &idx)| {
            let mut appointment = appointments[idx].clone();
            appointment.order_index = position;
            appointment
        })
        .collect();

    debug!(date, stops = n, total_minutes, "route assembled");

    OptimizedRoute {
        appointments: routed,
        total_estimated_time: total_minutes,
        total_distance_estimate: round_tenth(total_miles),
        finish_time_estimate: options.day_start.plus_minutes(total_minutes),
        missing_coordinates: missing,
    }
}

fn round_tenth(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}
