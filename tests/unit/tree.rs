//! Secondary consumer: the unbalanced tree.

use super::common::{person_by_id, Person};
use dynseq::UnbalancedTree;

#[test]
fn tree_of_people_by_id() {
    let mut tree = UnbalancedTree::new(person_by_id());
    for p in dynseq::testing::sample_people() {
        tree.insert(p).unwrap();
    }
    assert_eq!(tree.len(), 5);
    assert!(tree.contains(&Person::new(999, 0, 0.0)));
    assert!(!tree.contains(&Person::new(3, 0, 0.0)));
    // 69 at the root; 0, 1, 2 chain down the left, 999 on the right.
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.balance(), -2);
}
