#[cfg(test)]
#[path = "../../tests/unit/evaluation/speed_test.rs"]
mod speed_test;

use crate::models::InstanceMeta;
use crate::utils::Float;

/// A linear speed model: the speed decreases from max speed with an empty knapsack to min speed
/// with a full one.
#[derive(Clone, Debug)]
pub struct SpeedModel {
    max_speed: Float,
    rate: Float,
}

impl SpeedModel {
    /// Creates a speed model from instance properties.
    pub fn new(meta: &InstanceMeta) -> Self {
        Self { max_speed: meta.max_speed, rate: (meta.max_speed - meta.min_speed) / meta.capacity }
    }

    /// Returns speed decrease per weight unit.
    pub fn rate(&self) -> Float {
        self.rate
    }

    /// Returns the speed when the knapsack holds the given weight.
    pub fn speed(&self, weight: Float) -> Float {
        self.max_speed - self.rate * weight
    }

    /// Returns the time needed to travel the distance while carrying the given weight.
    pub fn travel_time(&self, distance: Float, weight: Float) -> Float {
        distance / self.speed(weight)
    }
}
