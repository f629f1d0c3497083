//! A collection of models which describe the problem instance, a solution and a result of its check.

mod instance;
pub use self::instance::*;

mod solution;
pub use self::solution::*;

mod verdict;
pub use self::verdict::*;
