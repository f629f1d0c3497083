#[cfg(test)]
#[path = "../../tests/unit/models/instance_test.rs"]
mod instance_test;

use crate::utils::{Float, GenericError, GenericResult};

/// Specifies a city (node) of the instance.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    /// A 1-based city index.
    pub index: usize,
    /// X coordinate.
    pub x: Float,
    /// Y coordinate.
    pub y: Float,
}

impl City {
    /// Returns the travel distance to another city: euclidean distance rounded up to the next
    /// integer (`CEIL_2D` edge weight type).
    pub fn distance(&self, other: &City) -> Float {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx * dx + dy * dy).sqrt().ceil()
    }
}

/// Specifies an item which can be picked up at its city.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// A 1-based item index.
    pub index: usize,
    /// Item profit.
    pub profit: Float,
    /// Item weight.
    pub weight: Float,
    /// An index of the city where the item is located.
    pub city: usize,
}

/// Keeps scalar instance properties which are defined in the header.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceMeta {
    /// Problem name.
    pub name: String,
    /// Knapsack data type label, e.g. "bounded strongly corr".
    pub knapsack_data_type: String,
    /// Edge weight type label, e.g. "CEIL_2D".
    pub edge_weight_type: String,
    /// Knapsack capacity.
    pub capacity: Float,
    /// Maximum allowed travel time.
    pub max_time: Float,
    /// Speed with a full knapsack.
    pub min_speed: Float,
    /// Speed with an empty knapsack.
    pub max_speed: Float,
}

/// A THOP instance: a set of cities, items located there and knapsack/speed settings.
///
/// The first city is the fixed origin of every tour, the last one is the fixed destination.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    /// Header properties.
    pub meta: InstanceMeta,
    cities: Vec<City>,
    items: Vec<Item>,
}

impl Instance {
    /// Creates a new instance checking its invariants.
    pub fn new(meta: InstanceMeta, cities: Vec<City>, items: Vec<Item>) -> GenericResult<Self> {
        if cities.is_empty() {
            return Err("instance should have at least one city".into());
        }

        check_dense_indices(cities.iter().map(|city| city.index), "city")?;
        check_dense_indices(items.iter().map(|item| item.index), "item")?;

        if !(meta.capacity > 0.) {
            return Err(format!("capacity of knapsack should be positive, got: '{}'", meta.capacity).into());
        }

        if !(meta.max_time > 0.) {
            return Err(format!("max time should be positive, got: '{}'", meta.max_time).into());
        }

        if !(meta.min_speed > 0. && meta.min_speed <= meta.max_speed) {
            return Err(format!(
                "speed bounds should satisfy 0 < min <= max, got min: '{}', max: '{}'",
                meta.min_speed, meta.max_speed
            )
            .into());
        }

        items.iter().try_for_each(|item| {
            if item.city < 1 || item.city > cities.len() {
                return Err(GenericError::from(format!(
                    "item {} is assigned to unknown city {}",
                    item.index, item.city
                )));
            }

            if !(item.profit >= 0. && item.weight >= 0.) {
                return Err(GenericError::from(format!("item {} has negative profit or weight", item.index)));
            }

            Ok(())
        })?;

        Ok(Self { meta, cities, items })
    }

    /// Returns amount of cities.
    pub fn dimension(&self) -> usize {
        self.cities.len()
    }

    /// Returns amount of items.
    pub fn items_size(&self) -> usize {
        self.items.len()
    }

    /// Returns all cities ordered by index.
    pub fn cities(&self) -> &[City] {
        self.cities.as_slice()
    }

    /// Returns all items ordered by index.
    pub fn items(&self) -> &[Item] {
        self.items.as_slice()
    }

    /// Returns a city by its 1-based index.
    pub fn city(&self, index: usize) -> Option<&City> {
        index.checked_sub(1).and_then(|idx| self.cities.get(idx))
    }

    /// Returns an item by its 1-based index.
    pub fn item(&self, index: usize) -> Option<&Item> {
        index.checked_sub(1).and_then(|idx| self.items.get(idx))
    }

    /// Returns the index of the tour origin.
    pub fn origin(&self) -> usize {
        1
    }

    /// Returns the index of the tour destination.
    pub fn destination(&self) -> usize {
        self.cities.len()
    }

    /// Returns a total profit of items available at each city, position `i` keeps a value for city `i + 1`.
    pub fn profit_per_city(&self) -> Vec<Float> {
        self.items.iter().fold(vec![0.; self.cities.len()], |mut acc, item| {
            acc[item.city - 1] += item.profit;
            acc
        })
    }
}

fn check_dense_indices(indices: impl Iterator<Item = usize>, kind: &str) -> GenericResult<()> {
    indices.zip(1_usize..).try_for_each(|(actual, expected)| {
        if actual == expected {
            Ok(())
        } else {
            Err(format!("{kind} index is out of sequence: expected {expected}, got {actual}").into())
        }
    })
}
