use super::*;

#[test]
fn test_unique_shortest_path() {
    let graph = Digraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 5), (1, 6), (3, 6), (6, 7)]);
    let path = shortest_path(&graph, &1, &7).unwrap();
    assert_eq!(path, vec![1, 6, 7]);
    assert!(graph.is_path(&path));
}

#[test]
fn test_path_through_cycle() {
    let graph = Digraph::from_edges([
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 2),
        (4, 5),
        (4, 8),
        (5, 6),
        (6, 7),
        (8, 7),
    ]);
    let path = shortest_path(&graph, &1, &7).unwrap();
    assert_eq!(path, vec![1, 2, 3, 4, 8, 7]);
    assert!(graph.is_path(&path));
}

#[test]
fn test_source_equals_dest() {
    let graph = Digraph::from_edges([(1, 2), (2, 3)]);
    assert_eq!(shortest_path(&graph, &1, &1), Some(vec![1]));
}

#[test]
fn test_multiple_loops() {
    let graph = Digraph::from_edges([(1, 2), (2, 3), (3, 1), (4, 3), (3, 5), (5, 4)]);
    let path = shortest_path(&graph, &4, &2).unwrap();
    assert_eq!(path, vec![4, 3, 1, 2]);
    assert!(graph.is_path(&path));
}

#[test]
fn test_tied_shortest_paths() {
    // two minimum-length routes; only length and validity are guaranteed
    let graph = Digraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
    let path = shortest_path(&graph, &1, &4).unwrap();
    assert_eq!(path.len(), 3);
    assert!(graph.is_path(&path));
    assert_eq!(path[0], 1);
    assert_eq!(path[2], 4);
}

#[test]
fn test_missing_source_is_no_path() {
    let graph = Digraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
    assert_eq!(shortest_path(&graph, &0, &4), None);
}

#[test]
fn test_missing_dest_is_no_path() {
    let graph = Digraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
    assert_eq!(shortest_path(&graph, &1, &53_453_456), None);
}

#[test]
fn test_missing_source_equal_to_dest_is_no_path() {
    let graph = Digraph::from_edges([(1, 2)]);
    assert_eq!(shortest_path(&graph, &9, &9), None);
}

#[test]
fn test_unreachable_dest() {
    let graph = Digraph::from_edges([(1, 2), (3, 4)]);
    assert_eq!(shortest_path(&graph, &1, &4), None);
}

#[test]
fn test_edges_are_directed() {
    let graph = Digraph::from_edges([(1, 2), (2, 3)]);
    assert_eq!(shortest_path(&graph, &3, &1), None);
}

#[test]
fn test_result_is_valid_path_on_larger_graph() {
    let graph = Digraph::from_edges([
        (1, 2),
        (2, 3),
        (2, 4),
        (1, 5),
        (2, 5),
        (4, 5),
        (5, 2),
        (5, 6),
        (6, 1),
    ]);
    for dest in [2, 3, 4, 5, 6] {
        let path = shortest_path(&graph, &1, &dest).unwrap();
        assert!(graph.is_path(&path));
        assert_eq!(*path.first().unwrap(), 1);
        assert_eq!(*path.last().unwrap(), dest);
    }
}
