use super::*;
use crate::helpers::InstanceBuilder;

#[test]
fn can_build_performed_tour_with_fixed_endpoints() {
    let instance = InstanceBuilder::default().cities(vec![(0., 0.), (1., 0.), (2., 0.), (3., 0.)]).build();
    let solution = Solution::new(vec![3, 2], vec![]);

    assert_eq!(solution.performed_tour(&instance), vec![1, 3, 2, 4]);
}

#[test]
fn can_build_performed_tour_for_empty_solution() {
    let instance = InstanceBuilder::default().build();

    assert_eq!(Solution::default().performed_tour(&instance), vec![1, 3]);
}
