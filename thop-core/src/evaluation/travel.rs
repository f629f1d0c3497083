#[cfg(test)]
#[path = "../../tests/unit/evaluation/travel_test.rs"]
mod travel_test;

use super::SpeedModel;
use crate::models::Instance;
use crate::utils::Float;
use rustc_hash::FxHashMap;

/// Profit and weight picked up when arriving at a tour position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pickup {
    /// Total profit of items picked up.
    pub profit: Float,
    /// Total weight of items picked up.
    pub weight: Float,
}

/// A single leg between two consecutive cities of the performed tour.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    /// Departure city.
    pub from: usize,
    /// Arrival city.
    pub to: usize,
    /// Travel distance.
    pub distance: Float,
    /// Speed on the leg.
    pub speed: Float,
    /// Travel time of the leg.
    pub time: Float,
    /// Weight carried while traveling the leg.
    pub weight: Float,
}

/// A result of travel simulation along the performed tour.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Travel {
    /// Legs in travel order.
    pub legs: Vec<Leg>,
    /// Total collected profit.
    pub profit: Float,
    /// Total collected weight.
    pub weight: Float,
    /// Total travel time.
    pub time: Float,
}

/// Accumulates profit and weight of collected items per tour position. Each item is assigned to
/// the first position where its city is visited, so it is picked up exactly once.
///
/// Tour cities and items are expected to be valid indices of the instance, the rest is ignored.
pub fn accumulate_pickups(instance: &Instance, tour: &[usize], items: &[usize]) -> Vec<Pickup> {
    let first_visits = tour.iter().enumerate().fold(FxHashMap::default(), |mut acc, (position, &city)| {
        acc.entry(city).or_insert(position);
        acc
    });

    items.iter().filter_map(|&item| instance.item(item)).fold(vec![Pickup::default(); tour.len()], |mut acc, item| {
        if let Some(&position) = first_visits.get(&item.city) {
            acc[position].profit += item.profit;
            acc[position].weight += item.weight;
        }

        acc
    })
}

/// Simulates the travel along the performed tour collecting given items.
///
/// The simulation is sequential: weight collected at a city slows down all following legs.
/// The thief departs empty: items assigned to the first tour position are never collected.
pub fn simulate_travel(instance: &Instance, tour: &[usize], items: &[usize]) -> Travel {
    let speed_model = SpeedModel::new(&instance.meta);
    let pickups = accumulate_pickups(instance, tour, items);

    let initial = Travel { legs: Vec::with_capacity(tour.len()), ..Travel::default() };

    tour.windows(2).zip(pickups.iter().skip(1)).fold(initial, |mut travel, (leg, pickup)| {
        let (from, to) = (leg[0], leg[1]);
        let distance = match (instance.city(from), instance.city(to)) {
            (Some(from), Some(to)) => from.distance(to),
            _ => 0.,
        };

        let speed = speed_model.speed(travel.weight);
        let time = speed_model.travel_time(distance, travel.weight);

        travel.legs.push(Leg { from, to, distance, speed, time, weight: travel.weight });
        travel.time += time;
        travel.weight += pickup.weight;
        travel.profit += pickup.profit;

        travel
    })
}
