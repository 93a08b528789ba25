use super::*;
use crate::helpers::algorithms::som::*;

#[test]
fn can_create_map_with_given_shape() {
    let map = Map::new(11, 13, 17);

    assert_eq!(map.width(), 11);
    assert_eq!(map.height(), 13);
    assert_eq!(map.depth(), 17);
    assert!(!map.is_populated());
    assert_eq!(map.iter().count(), 0);
}

#[test]
fn can_set_and_get_node() {
    let mut map = Map::new(5, 5, 3);
    let node = MapNode::new(1, 2, &[1., 3., 5.]);

    let previous = map.set(node.x(), node.y(), node.clone());

    assert!(previous.is_none());
    assert_eq!(map.get(1, 2), Some(&node));
    assert_eq!(map[(1, 2)], node);
    assert!(map.get(2, 1).is_none());
    assert!(map.get(5, 0).is_none());
}

#[test]
fn can_replace_node() {
    let mut map = Map::new(2, 2, 1);
    map.set(0, 1, MapNode::new(0, 1, &[1.]));

    let previous = map.set(0, 1, MapNode::new(0, 1, &[2.]));

    assert_eq!(previous.map(|node| node.weights().to_vec()), Some(vec![1.]));
    assert_eq!(map[(0, 1)].weights(), &[2.]);
}

#[test]
fn can_mutate_node_via_index() {
    let mut map = create_uniform_map(2, 2, &[0., 0.]);

    map[(1, 0)].adjust_weights(&[2., 4.], 0.5, 1.).unwrap();

    assert_eq!(map[(1, 0)].weights(), &[1., 2.]);
    assert_eq!(map.get_mut(0, 0).map(|node| node.weights().to_vec()), Some(vec![0., 0.]));
}

#[test]
#[should_panic(expected = "out of map bounds")]
fn can_panic_when_setting_out_of_bounds() {
    let mut map = Map::new(2, 2, 1);

    map.set(2, 0, MapNode::new(2, 0, &[1.]));
}

#[test]
#[should_panic(expected = "is not populated")]
fn can_panic_when_indexing_unpopulated_cell() {
    let map = Map::new(2, 2, 1);

    let _ = &map[(0, 0)];
}

#[test]
fn can_iterate_nodes_in_row_major_order() {
    let map = create_uniform_map(3, 2, &[1.]);

    let coordinates = map.iter().map(|node| (node.x(), node.y())).collect::<Vec<_>>();

    assert_eq!(coordinates, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    assert!(map.is_populated());
}

#[test]
fn can_fail_train_with_vector_of_incorrect_length() {
    let mut map = Map::new(0, 0, 1);

    let error = map.train(&[vec![1., 2.]]).expect_err("wrong length should fail");

    assert_eq!(error.parameter(), "training_data");
    assert!(error.message().contains("incorrect amount of data"));
}

#[test]
fn can_fail_train_without_mutation_when_any_vector_is_invalid() {
    let log = CallLog::default();
    let mut map = Map::with_strategies(
        2,
        2,
        2,
        Arc::new(RecordingInitializer::new(log.clone(), Some(vec![0., 0.]))),
        Arc::new(RecordingTrainer::new(log.clone())),
    );

    let result = map.train(&[vec![1., 2.], vec![1.]]);

    assert!(result.is_err());
    assert!(log.calls().is_empty());
    assert!(!map.is_populated());
}

#[test]
fn can_fail_train_with_empty_data_using_default_initializer() {
    let mut map = Map::new(2, 2, 1);

    let error = map.train(&[]).expect_err("empty training data should fail");

    assert_eq!(error.parameter(), "training_data");
    assert!(!map.is_populated());
}

parameterized_test! {can_train_map_without_nodes, (width, height), {
    can_train_map_without_nodes_impl(width, height);
}}

can_train_map_without_nodes! {
    case01_empty: (0, 0),
    case02_empty_column: (0, 4),
    case03_empty_row: (5, 0),
}

fn can_train_map_without_nodes_impl(width: usize, height: usize) {
    let mut map = Map::new(width, height, 1);

    map.train(&[vec![1.]]).unwrap();

    assert_eq!(map.iter().count(), 0);
}

#[test]
fn can_forward_train_to_initializer_and_then_trainer() {
    let log = CallLog::default();
    let mut map = Map::with_strategies(
        3,
        3,
        2,
        Arc::new(RecordingInitializer::new(log.clone(), Some(vec![0., 0.]))),
        Arc::new(RecordingTrainer::new(log.clone())),
    );

    map.train(&[vec![1., 2.], vec![3., 4.]]).unwrap();

    assert_eq!(log.calls(), vec!["initialize:2".to_string(), "train:2:true".to_string()]);
}

#[test]
fn can_forward_empty_training_data_to_strategies() {
    let log = CallLog::default();
    let mut map = Map::with_strategies(
        0,
        0,
        0,
        Arc::new(RecordingInitializer::new(log.clone(), None)),
        Arc::new(RecordingTrainer::new(log.clone())),
    );

    map.train(&[]).unwrap();

    assert_eq!(log.calls(), vec!["initialize:0".to_string(), "train:0:true".to_string()]);
}

struct FailingInitializer;

impl Initializer for FailingInitializer {
    fn initialize(&self, _: &mut Map, _: &[Vector]) -> ArgumentResult<()> {
        Err(ArgumentError::new("training_data", "cannot initialize"))
    }
}

#[test]
fn can_skip_trainer_when_initializer_fails() {
    let log = CallLog::default();
    let trainer = Arc::new(RecordingTrainer::new(log.clone()));
    let mut map = Map::with_strategies(2, 2, 1, Arc::new(FailingInitializer), trainer);

    let result = map.train(&[vec![1.]]);

    assert_eq!(result, Err(ArgumentError::new("training_data", "cannot initialize")));
    assert!(log.calls().is_empty());
}

#[test]
fn can_get_best_matching_node() {
    let mut map = create_uniform_map(4, 4, &[1., 2., 3.]);
    let expected = MapNode::new(1, 2, &[5., 2., 7.]);
    map.set(1, 2, expected.clone());

    let actual = map.get_best_matching_node(&[4., 3., 6.]).unwrap();

    assert_eq!(actual, &expected);
}

#[test]
fn can_return_first_node_on_ties() {
    let mut map = create_uniform_map(3, 3, &[0.]);
    map.set(2, 0, MapNode::new(2, 0, &[5.]));
    map.set(0, 2, MapNode::new(0, 2, &[5.]));

    let actual = map.get_best_matching_node(&[5.]).unwrap();

    assert_eq!((actual.x(), actual.y()), (2, 0));
}

#[test]
fn can_return_first_node_on_uniform_map() {
    let map = create_uniform_map(3, 3, &[1., 1.]);

    let actual = map.get_best_matching_node(&[7., -3.]).unwrap();

    assert_eq!((actual.x(), actual.y()), (0, 0));
}

#[test]
fn can_fail_best_matching_node_with_different_dimensions() {
    let map = Map::new(0, 0, 1);

    let error = map.get_best_matching_node(&[2., 3.]).expect_err("different dimensions should fail");

    assert_eq!(error.parameter(), "query");
    assert!(error.message().contains("different dimensions"));
}

#[test]
fn can_fail_best_matching_node_on_empty_map() {
    let map = Map::new(0, 0, 1);

    let error = map.get_best_matching_node(&[2.]).expect_err("empty map should fail");

    assert_eq!(error.parameter(), "map");
}

#[test]
fn can_fail_best_matching_node_on_partially_populated_map() {
    let mut map = create_uniform_map(2, 2, &[1.]);
    map.nodes[3] = None;

    let error = map.get_best_matching_node(&[2.]).expect_err("unpopulated map should fail");

    assert_eq!(error.parameter(), "map");
    assert!(error.message().contains("(1, 1) is not populated"));
}
