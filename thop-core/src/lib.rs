//! Core crate contains a model of the ***Thief Orienteering Problem*** (THOP) together with
//! a checker which validates and scores solutions produced by external solvers.
//!
//! # Overview
//!
//! A THOP instance defines cities with coordinates and items assigned to them. A thief starts at
//! the first city, must finish at the last one, and collects items on the way. Carried weight
//! slows the thief down linearly from `max speed` (empty knapsack) to `min speed` (full
//! knapsack), and the whole travel has to fit into the instance time budget.
//!
//! The crate does not search for solutions: it reads an instance, reads a solution and returns
//! a [`Verdict`](models::Verdict) which is either a score or a list of violated constraints.
//!
//! # Examples
//!
//! ```
//! use thop_core::evaluation::evaluate;
//! use thop_core::format::ThopProblem;
//!
//! let instance = r#"PROBLEM NAME: tiny-ThOP
//! KNAPSACK DATA TYPE: uncorrelated
//! DIMENSION: 3
//! NUMBER OF ITEMS: 1
//! CAPACITY OF KNAPSACK: 10
//! MAX TIME: 100
//! MIN SPEED: 1
//! MAX SPEED: 1
//! EDGE_WEIGHT_TYPE: CEIL_2D
//! NODE_COORD_SECTION (INDEX, X, Y):
//! 1 0 0
//! 2 3 4
//! 3 6 4
//! ITEMS SECTION (INDEX, PROFIT, WEIGHT, ASSIGNED NODE NUMBER):
//! 1 10 2 2
//! "#
//! .to_string()
//! .read_thop()
//! .unwrap();
//!
//! let verdict = evaluate(&instance, "[2]\n[1]\n").unwrap();
//!
//! assert!(verdict.is_feasible());
//! assert_eq!(verdict.score.map(|score| score.profit), Some(10.));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

pub mod evaluation;
pub mod format;
pub mod models;
pub mod prelude;
pub mod utils;
