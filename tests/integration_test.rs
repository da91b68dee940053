use node_list::{LinkedList, ListError, Node};

#[test]
fn test_append_get_and_render() {
    let vals = [3, 1, 4, 1, 5, 9];
    let mut list = LinkedList::new();
    for v in vals {
        list.append(v);
    }

    for (i, v) in vals.iter().enumerate() {
        assert_eq!(list.get(i as isize), Ok(v));
    }
    assert_eq!(list.to_string(), "[3, 1, 4, 1, 5, 9]");
    assert_eq!(list.len(), vals.len());
}

#[test]
fn test_scenario_pop_until_empty() {
    let mut list = Node::new();
    list.append(1);
    list.append(2);
    assert_eq!(list.to_bracket_string(), "[1, 2]");
    assert_eq!(list.pop(), Ok(2));
    assert_eq!(list.pop(), Ok(1));
    assert_eq!(list.pop(), Err(ListError::EmptyCollection));
}

#[test]
fn test_scenario_push() {
    let mut list = Node::with_value(1);
    list.push(2);
    assert_eq!(list.to_bracket_string(), "[2, 1]");
}

#[test]
fn test_scenario_arrow_and_reverse() {
    let mut list = Node::new();
    list.append(10);
    list.append(20);
    list.append(30);
    assert_eq!(list.to_arrow_string(), "10->20->30");

    let list = list.reversed();
    assert_eq!(list.to_arrow_string(), "30->20->10");
}

#[test]
fn test_scenario_iterate_then_exhaust() {
    let list: Node<i32> = [1, 2].into_iter().collect();
    let mut iter = list.iter();
    assert_eq!(iter.try_next(), Ok(&1));
    assert_eq!(iter.try_next(), Ok(&2));
    assert_eq!(iter.try_next(), Err(ListError::IteratorExhausted));
}

#[test]
fn test_len_is_pushes_plus_appends_minus_pops() {
    let mut list = Node::new();
    let mut expected = 0usize;
    for i in 0..50 {
        match i % 5 {
            0 | 1 => {
                list.append(i);
                expected += 1;
            }
            2 => {
                list.push(i);
                expected += 1;
            }
            _ => {
                if list.pop().is_ok() {
                    expected -= 1;
                }
            }
        }
        assert_eq!(list.len(), expected);
    }
}

#[test]
fn test_contains_matches_iteration() {
    let list: Node<i32> = (0..10).map(|i| i * 3).collect();
    for v in 0..30 {
        assert_eq!(list.contains(&v), list.iter().any(|x| *x == v));
    }
}

#[test]
fn test_index_bounds() {
    let mut list: Node<String> = ["a", "b"].into_iter().map(String::from).collect();
    assert_eq!(list.get(-1), Err(ListError::IndexOutOfRange));
    assert_eq!(list.get(2), Err(ListError::IndexOutOfRange));
    assert_eq!(list.set(2, "c".to_string()), Err(ListError::IndexOutOfRange));

    list.set(1, "z".to_string()).unwrap();
    assert_eq!(list.get(1).map(String::as_str), Ok("z"));
    assert_eq!(list.to_arrow_string(), "a->z");
}

// append and pop walk the whole chain (O(n)); this only pins that they stay
// correct on a long list, not their speed.
#[test]
fn test_append_and_pop_on_long_list() {
    let mut list = Node::new();
    for i in 0..2_000 {
        list.append(i);
    }
    for i in (1_000..2_000).rev() {
        assert_eq!(list.pop(), Ok(i));
    }
    assert_eq!(list.len(), 1_000);
}

#[test]
fn test_reverse_twice_is_identity() {
    let list: Node<i32> = (0..100).collect();
    let original = list.clone();
    assert_eq!(list.reversed().reversed(), original);
}
