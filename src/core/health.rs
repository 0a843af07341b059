//! Health classification from body proportions

use super::types::{HealthStatus, Pet, Species};

const UNHEALTHY_BELOW: f64 = 2.0;
const HEALTHY_FROM: f64 = 3.0;
const UNHEALTHY_ABOVE: f64 = 5.0;

/// Classify a pet into one of three health tiers.
///
/// A cat on its last life is always unhealthy. Otherwise the tier comes from
/// `weight / (height * length)`: below 2 or above 5 is unhealthy, 3..=5 is
/// healthy and 2..3 is very healthy. The upper bound is strict, so a ratio of
/// exactly 5 is healthy.
pub(crate) fn classify(pet: &Pet) -> HealthStatus {
    if let Species::Cat { number_of_lives: 1 } = pet.species {
        return HealthStatus::Unhealthy;
    }

    let ratio = pet.weight / (pet.height * pet.length);

    if ratio < UNHEALTHY_BELOW || ratio > UNHEALTHY_ABOVE {
        HealthStatus::Unhealthy
    } else if ratio >= HEALTHY_FROM {
        HealthStatus::Healthy
    } else {
        HealthStatus::VeryHealthy
    }
}
