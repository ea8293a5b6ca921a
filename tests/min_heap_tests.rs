use dual_sssp::data_structures::MinHeap;
use dual_sssp::Error;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u32, usize),
    Extract,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u32..1000, 0usize..100).prop_map(|(p, v)| Op::Insert(p, v)),
        1 => Just(Op::Extract),
    ]
}

#[test]
fn test_empty_heap_extract_is_invalid_state() {
    let mut heap: MinHeap<u32, usize> = MinHeap::new();
    assert!(matches!(heap.extract_min(), Err(Error::InvalidState(_))));

    heap.insert(3, 1);
    assert_eq!(heap.extract_min().unwrap(), (3, 1));
    assert!(matches!(heap.extract_min(), Err(Error::InvalidState(_))));
}

#[test]
fn test_duplicate_vertices_are_allowed() {
    let mut heap = MinHeap::new();
    heap.insert(9u32, 4usize);
    heap.insert(2, 4);
    heap.insert(5, 4);
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.extract_min().unwrap(), (2, 4));
    assert_eq!(heap.extract_min().unwrap(), (5, 4));
    assert_eq!(heap.extract_min().unwrap(), (9, 4));
}

proptest! {
    #[test]
    fn prop_drain_is_non_decreasing(ops in prop::collection::vec(op(), 0..200)) {
        let mut heap = MinHeap::new();
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(priority, vertex) => {
                    heap.insert(priority, vertex);
                    model.push(priority);
                }
                Op::Extract => {
                    if heap.is_empty() {
                        prop_assert!(heap.extract_min().is_err());
                    } else {
                        let (priority, _) = heap.extract_min().unwrap();
                        model.sort_unstable();
                        prop_assert_eq!(priority, model.remove(0));
                    }
                }
            }
            prop_assert_eq!(heap.len(), model.len());
        }

        let mut drained = Vec::new();
        while !heap.is_empty() {
            drained.push(heap.extract_min().unwrap().0);
        }
        prop_assert!(drained.windows(2).all(|w| w[0] <= w[1]));
        model.sort_unstable();
        prop_assert_eq!(drained, model);
    }
}
