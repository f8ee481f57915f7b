//! Candidate scoring for the greedy route construction.
//!
//! Each enabled criterion contributes on a shared 0..=100 scale, multiplied
//! by its weight. The per-criterion contributions are retained in config
//! order so ties can be broken by the user's priority ordering.

use std::cmp::Ordering;

use crate::distance::DistanceEstimate;
use crate::model::Appointment;
use crate::priority::{PriorityConfig, PriorityKey};

/// Shared scale for per-criterion contributions before weighting.
const CONTRIBUTION_SCALE: f64 = 100.0;

/// Minute gap at which the appointment-time contribution halves.
const TIME_DECAY_MINUTES: f64 = 60.0;

/// Leg distance in miles at which the distance contribution halves.
const DISTANCE_DECAY_MILES: f64 = 5.0;

/// On-site minutes at which the time-at-house contribution halves.
const ON_SITE_DECAY_MINUTES: f64 = 60.0;

/// Bounded inverse-proportional falloff: full scale at zero, half at
/// `half`, approaching zero as `value` grows.
fn decay(value: f64, half: f64) -> f64 {
    CONTRIBUTION_SCALE * half / (half + value)
}

/// Route-construction state a candidate is scored against.
#[derive(Debug, Clone)]
pub struct ScoreContext<'a> {
    /// Projected clock, fractional minutes from midnight.
    pub clock_minutes: f64,
    /// City of the immediately preceding stop; None before the first pick.
    pub previous_city: Option<&'a str>,
    /// Whether an open house has already been placed in this pass.
    pub open_house_visited: bool,
}

/// A candidate's score. `contributions` holds the weighted per-criterion
/// values in config-list order.
#[derive(Debug, Clone)]
pub struct CandidateScore {
    pub total: f64,
    pub contributions: Vec<f64>,
}

/// Scores one unvisited candidate against the current route tail.
///
/// `leg` is the pre-estimated distance from the current position; None from
/// the virtual day start, where distance must not influence the pick.
pub fn score_candidate(
    candidate: &Appointment,
    leg: Option<&DistanceEstimate>,
    ctx: &ScoreContext<'_>,
    config: &PriorityConfig,
) -> CandidateScore {
    let mut total = 0.0;
    let mut contributions = Vec::with_capacity(config.criteria.len());
    for criterion in &config.criteria {
        let contribution = if criterion.enabled {
            f64::from(criterion.weight) * raw_contribution(criterion.key, candidate, leg, ctx)
        } else {
            0.0
        };
        total += contribution;
        contributions.push(contribution);
    }
    CandidateScore {
        total,
        contributions,
    }
}

fn raw_contribution(
    key: PriorityKey,
    candidate: &Appointment,
    leg: Option<&DistanceEstimate>,
    ctx: &ScoreContext<'_>,
) -> f64 {
    match key {
        PriorityKey::OpenHouse => {
            // Flat bonus front-loads open houses until the first one is
            // placed.
            if candidate.is_open_house && !ctx.open_house_visited {
                CONTRIBUTION_SCALE
            } else {
                0.0
            }
        }
        PriorityKey::AppointmentTime => {
            let gap = (f64::from(candidate.start_time.minutes()) - ctx.clock_minutes).abs();
            decay(gap, TIME_DECAY_MINUTES)
        }
        PriorityKey::Distance => match leg {
            Some(leg) => decay(leg.miles, DISTANCE_DECAY_MILES),
            None => 0.0,
        },
        PriorityKey::TimeAtHouse => {
            decay(f64::from(candidate.time_at_house), ON_SITE_DECAY_MINUTES)
        }
        PriorityKey::CityCluster => match ctx.previous_city {
            Some(city) if city == candidate.city => CONTRIBUTION_SCALE,
            _ => 0.0,
        },
    }
}

/// Orders candidates for selection; `Less` means `a` is picked over `b`.
///
/// Higher total wins. Ties fall through to the per-criterion contributions
/// in config-list order, then ascending start time, then address.
pub fn compare_candidates(
    a: (&Appointment, &CandidateScore),
    b: (&Appointment, &CandidateScore),
) -> Ordering {
    let (appt_a, score_a) = a;
    let (appt_b, score_b) = b;

    let by_total = score_b.total.total_cmp(&score_a.total);
    if by_total != Ordering::Equal {
        return by_total;
    }
    for (contribution_a, contribution_b) in score_a.contributions.iter().zip(&score_b.contributions)
    {
        let by_criterion = contribution_b.total_cmp(contribution_a);
        if by_criterion != Ordering::Equal {
            return by_criterion;
        }
    }
    appt_a
        .start_time
        .cmp(&appt_b.start_time)
        .then_with(|| appt_a.property_address.cmp(&appt_b.property_address))
}
