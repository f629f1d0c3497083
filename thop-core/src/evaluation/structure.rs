#[cfg(test)]
#[path = "../../tests/unit/evaluation/structure_test.rs"]
mod structure_test;

use crate::models::{Instance, Violation};
use rustc_hash::FxHashSet;

/// Checks that the performed tour and collected items reference existing cities and items,
/// items are not repeated and each item's city is visited. Each kind of violation is reported once.
pub fn check_structure(instance: &Instance, tour: &[i64], items: &[i64]) -> Vec<Violation> {
    let is_known_city = |city: i64| city >= 1 && city <= instance.dimension() as i64;
    let is_known_item = |item: i64| item >= 1 && item <= instance.items_size() as i64;

    let mut violations = vec![];

    if tour.iter().any(|&city| !is_known_city(city)) {
        violations.push(Violation::UnknownCity);
    }

    if items.iter().any(|&item| !is_known_item(item)) {
        violations.push(Violation::UnknownItem);
    }

    let mut collected = FxHashSet::default();
    if items.iter().any(|&item| !collected.insert(item)) {
        violations.push(Violation::DuplicateItem);
    }

    let visited = tour.iter().copied().filter(|&city| is_known_city(city)).map(|city| city as usize).collect::<FxHashSet<_>>();
    let is_uncollectable = items
        .iter()
        .copied()
        .filter(|&item| is_known_item(item))
        .filter_map(|item| instance.item(item as usize))
        .any(|item| !visited.contains(&item.city));

    if is_uncollectable {
        violations.push(Violation::UncollectableItem);
    }

    violations
}
