use super::*;
use crate::helpers::*;
use std::fs::File;

fn get_example_problem_string() -> String {
    let mut buffer = String::new();

    get_test_resource(TINY_INSTANCE_PATH)
        .expect("cannot open file")
        .read_to_string(&mut buffer)
        .expect("cannot read file");

    buffer
}

fn get_example_problem_reader() -> BufReader<File> {
    BufReader::new(get_test_resource(TINY_INSTANCE_PATH).expect("cannot open file"))
}

#[test]
fn can_read_header() {
    let mut reader = ThopReader::new(get_example_problem_reader());

    let header = reader.read_header().expect("cannot read header");

    assert_eq!(header.dimension, 5);
    assert_eq!(header.items_size, 4);
    assert_eq!(header.meta.name, "tiny-ThOP");
    assert_eq!(header.meta.knapsack_data_type, "uncorrelated");
    assert_eq!(header.meta.edge_weight_type, "CEIL_2D");
    assert_eq!(header.meta.capacity, 10.);
    assert_eq!(header.meta.max_time, 50.);
    assert_eq!(header.meta.min_speed, 0.1);
    assert_eq!(header.meta.max_speed, 1.);
}

#[test]
fn can_read_cities_and_items() {
    let mut reader = ThopReader::new(get_example_problem_reader());
    reader.read_header().expect("cannot read header");

    let cities = reader.read_cities(5).expect("cannot read cities");
    let items = reader.read_items(4, 5).expect("cannot read items");

    assert_eq!(cities.len(), 5);
    assert_eq!(cities[3], City { index: 4, x: 6., y: 0. });
    assert_eq!(items.len(), 4);
    assert_eq!(items[1], Item { index: 2, profit: 20., weight: 5., city: 3 });
}

#[test]
fn can_read_instance() {
    let instance = get_example_problem_reader().read_thop().expect("cannot read instance");

    assert_eq!(instance.dimension(), 5);
    assert_eq!(instance.items_size(), 4);
    assert_eq!(instance.destination(), 5);
}

#[test]
fn can_keep_numeric_values_exactly() {
    let builder = {
        let mut builder = InstanceBuilder::default();
        builder
            .cities(vec![(0.123456789, -17.5), (1e-7, 3.3333333333), (288.0, 149.25)])
            .items(vec![(101.75, 0.3, 2), (1e6, 12345.678, 3)])
            .capacity(25936.5)
            .max_time(2613.137)
            .speed(0.1, 1.);
        builder
    };

    let instance = builder.build_from_text();

    assert_eq!(instance, builder.build());
}

parameterized_test! {can_detect_malformed_instance, (from, to, expected), {
    can_detect_malformed_instance_impl(from, to, expected);
}}

can_detect_malformed_instance! {
    case01_unexpected_key: ("DIMENSION", "DIMENSIONS", "line 3: unexpected key, expecting: 'DIMENSION', got: 'DIMENSIONS'"),
    case02_non_numeric_dimension: ("DIMENSION:\t5", "DIMENSION:\tfive", "line 3: cannot parse DIMENSION: 'invalid digit found in string'"),
    case03_non_numeric_capacity: ("KNAPSACK:\t10", "KNAPSACK:\tten", "line 5: cannot parse CAPACITY OF KNAPSACK: 'invalid float literal'"),
    case04_missing_colon: ("MAX TIME:\t50", "MAX TIME\t50", "line 6: expected colon separated string, got: 'MAX TIME\t50'"),
    case05_missing_section: ("NODE_COORD_SECTION", "NODES", "line 10: expecting NODE_COORD_SECTION, got: 'NODES\t(INDEX, X, Y):'"),
    case06_bad_coord: ("4\t6\t0\n", "4\t6\n", "line 14: unexpected coord data: '4\t6'"),
    case07_non_numeric_coord: ("4\t6\t0\n", "4\t6\tzero\n", "line 14: cannot parse coord.y: 'invalid float literal'"),
    case08_out_of_sequence: ("4\t6\t0\n", "7\t6\t0\n", "line 14: unexpected coord index, expecting: 4, got: 7"),
    case09_more_cities_declared: ("DIMENSION:\t5", "DIMENSION:\t6", "line 16: unexpected coord data: 'ITEMS SECTION\t(INDEX, PROFIT, WEIGHT, ASSIGNED NODE NUMBER):'"),
    case10_fewer_items_present: ("NUMBER OF ITEMS:\t4", "NUMBER OF ITEMS:\t5", "line 21: unexpected end of file"),
    case11_more_items_present: ("NUMBER OF ITEMS:\t4", "NUMBER OF ITEMS:\t3", "line 20: unexpected data after the last declared item: '4\t5\t1\t2'"),
    case12_unknown_item_city: ("3\t15\t4\t4", "3\t15\t4\t6", "line 19: item is assigned to unknown city: 6"),
    case13_negative_weight: ("3\t15\t4\t4", "3\t15\t-4\t4", "line 19: item profit and weight should be non-negative"),
    case14_zero_capacity: ("KNAPSACK:\t10", "KNAPSACK:\t0", "capacity of knapsack should be positive, got: '0'"),
    case15_wrong_speed: ("MIN SPEED:\t0.1", "MIN SPEED:\t1.5", "speed bounds should satisfy 0 < min <= max, got min: '1.5', max: '1'"),
    case16_zero_dimension: ("DIMENSION:\t5", "DIMENSION:\t0", "line 3: DIMENSION should be positive"),
    case17_infinite_time: ("MAX TIME:\t50", "MAX TIME:\tinf", "line 6: cannot parse MAX TIME: 'non-finite value'"),
}

fn can_detect_malformed_instance_impl(from: &str, to: &str, expected: &str) {
    let content = get_example_problem_string().replacen(from, to, 1);

    let result = content.read_thop();

    assert_eq!(result.map_err(|err| err.to_string()), Err(expected.to_string()));
}

#[test]
fn can_read_instance_with_trailing_blank_lines_and_eof() {
    let content = get_example_problem_string() + "\n\nEOF\n";

    assert!(content.read_thop().is_ok());
}

#[test]
fn can_read_instance_with_windows_line_endings() {
    let content = get_example_problem_string().replace('\n', "\r\n");

    let instance = content.read_thop().expect("cannot read instance");

    assert_eq!(instance.meta.name, "tiny-ThOP");
    assert_eq!(instance.item(4).map(|item| item.city), Some(2));
}
