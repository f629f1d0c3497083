use crate::format::ThopProblem;
use crate::models::{City, Instance, InstanceMeta, Item};
use crate::utils::Float;

/// Builds instances and their text representation for tests.
pub struct InstanceBuilder {
    meta: InstanceMeta,
    cities: Vec<(Float, Float)>,
    items: Vec<(Float, Float, usize)>,
}

impl Default for InstanceBuilder {
    fn default() -> Self {
        Self {
            meta: InstanceMeta {
                name: "test-ThOP".to_string(),
                knapsack_data_type: "uncorrelated".to_string(),
                edge_weight_type: "CEIL_2D".to_string(),
                capacity: 10.,
                max_time: 100.,
                min_speed: 0.1,
                max_speed: 1.,
            },
            cities: vec![(0., 0.), (3., 4.), (6., 4.)],
            items: vec![],
        }
    }
}

impl InstanceBuilder {
    pub fn cities(&mut self, cities: Vec<(Float, Float)>) -> &mut Self {
        self.cities = cities;
        self
    }

    pub fn items(&mut self, items: Vec<(Float, Float, usize)>) -> &mut Self {
        self.items = items;
        self
    }

    pub fn capacity(&mut self, capacity: Float) -> &mut Self {
        self.meta.capacity = capacity;
        self
    }

    pub fn max_time(&mut self, max_time: Float) -> &mut Self {
        self.meta.max_time = max_time;
        self
    }

    pub fn speed(&mut self, min_speed: Float, max_speed: Float) -> &mut Self {
        self.meta.min_speed = min_speed;
        self.meta.max_speed = max_speed;
        self
    }

    pub fn build(&self) -> Instance {
        Instance::new(
            self.meta.clone(),
            self.cities.iter().enumerate().map(|(idx, &(x, y))| City { index: idx + 1, x, y }).collect(),
            self.items
                .iter()
                .enumerate()
                .map(|(idx, &(profit, weight, city))| Item { index: idx + 1, profit, weight, city })
                .collect(),
        )
        .expect("cannot build instance")
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("PROBLEM NAME: \t{}", self.meta.name),
            format!("KNAPSACK DATA TYPE: \t{}", self.meta.knapsack_data_type),
            format!("DIMENSION: \t{}", self.cities.len()),
            format!("NUMBER OF ITEMS: \t{}", self.items.len()),
            format!("CAPACITY OF KNAPSACK: \t{}", self.meta.capacity),
            format!("MAX TIME: \t{}", self.meta.max_time),
            format!("MIN SPEED: \t{}", self.meta.min_speed),
            format!("MAX SPEED: \t{}", self.meta.max_speed),
            format!("EDGE_WEIGHT_TYPE: \t{}", self.meta.edge_weight_type),
            "NODE_COORD_SECTION\t(INDEX, X, Y): ".to_string(),
        ];

        lines.extend(self.cities.iter().enumerate().map(|(idx, (x, y))| format!("{}\t{x}\t{y}", idx + 1)));
        lines.push("ITEMS SECTION\t(INDEX, PROFIT, WEIGHT, ASSIGNED NODE NUMBER): ".to_string());
        lines.extend(
            self.items
                .iter()
                .enumerate()
                .map(|(idx, (profit, weight, city))| format!("{}\t{profit}\t{weight}\t{city}", idx + 1)),
        );

        lines.join("\n") + "\n"
    }

    pub fn build_from_text(&self) -> Instance {
        self.to_text().read_thop().expect("cannot read instance")
    }
}
