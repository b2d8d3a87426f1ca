#![cfg(test)]

use std::collections::{BTreeSet, VecDeque};
use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::seq;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_empty_sequence_properties() {
    let empty: Sequence<i32> = seq![];

    assert_eq!(empty.size(), 0, "Empty sequence should have size 0.");
    assert_eq!(empty.sum(), 0, "Empty sequence should sum to 0.");
    assert_eq!(
        empty.product(),
        1,
        "Empty sequence product should be the multiplicative identity."
    );
    assert!(empty.to_array().is_empty(), "Empty sequence should produce an empty Array.");
    assert_eq!(empty, Sequence::default());

    assert_eq!(empty.try_front(), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(empty.try_back(), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(empty.try_pop_back(), Err(EmptySequence));
    assert_eq!(empty.try_pop_front(), Err(EmptySequence));
    assert!(empty.try_split_at(0).is_err(), "An empty sequence has no split points.");

    assert_panics!({ empty.front(); });
    assert_panics!({ empty.back(); });
    assert_panics!({ empty.pop_back(); });
    assert_panics!({ empty.pop_front(); });
}

#[test]
fn test_accessors() {
    let seq = seq![1, 2, 3];
    let chars = seq!['a', 'b', 'c', 'd'];

    assert_eq!(*seq.front(), 1);
    assert_eq!(*seq.back(), 3);
    assert_eq!(*chars.front(), 'a');
    assert_eq!(*chars.back(), 'd');

    for i in 0..seq.size() {
        assert_eq!(*seq.at(i), i as i32 + 1, "at should return elements in order.");
    }

    assert_eq!(
        seq.try_at(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Indices are never clamped."
    );
    assert_panics!({ seq.at(3); });
    assert_panics!({ seq.at(usize::MAX); });
}

#[test]
fn test_folds() {
    assert_eq!(seq![1, 2, 3].sum(), 6);
    assert_eq!(seq![1, 2, 3].product(), 6);
    assert_eq!(seq![5].product(), 5);
    assert_eq!(seq![1.5, 2.5].sum(), 4.0);
    assert_eq!(Sequence::range_inclusive(1_u64..=10).product(), 3_628_800);
}

#[test]
fn test_push_and_pop() {
    let seq = seq![1, 2, 3];
    let chars = seq!['a', 'b', 'c', 'd'];

    assert_eq!(seq.push_back(4), seq![1, 2, 3, 4]);
    assert_eq!(chars.push_back('e'), seq!['a', 'b', 'c', 'd', 'e']);
    assert_eq!(seq.push_front(0), seq![0, 1, 2, 3]);
    assert_eq!(chars.push_front('z'), seq!['z', 'a', 'b', 'c', 'd']);

    assert_eq!(seq.pop_back(), seq![1, 2]);
    assert_eq!(chars.pop_back(), seq!['a', 'b', 'c']);
    assert_eq!(seq.pop_front(), seq![2, 3]);
    assert_eq!(chars.pop_front(), seq!['b', 'c', 'd']);

    assert_eq!(seq, seq![1, 2, 3], "The receiver should never be modified.");

    let single = Sequence::new().push_back(1);
    assert_eq!(single, seq![1]);
    assert_eq!(single.pop_back(), Sequence::new());
    assert_eq!(single.pop_front(), Sequence::new());
}

#[test]
fn test_split() {
    let seq = seq![1, 2, 3];
    let chars = seq!['a', 'b', 'c', 'd'];

    assert_eq!(seq.split_first_part(0), seq![1]);
    assert_eq!(seq.split_first_part(1), seq![1, 2]);
    assert_eq!(seq.split_first_part(2), seq![1, 2, 3]);
    assert_eq!(chars.split_first_part(3), seq!['a', 'b', 'c', 'd']);

    assert_eq!(seq.split_second_part(0), seq![2, 3]);
    assert_eq!(seq.split_second_part(1), seq![3]);
    assert_eq!(seq.split_second_part(2), Sequence::new());
    assert_eq!(chars.split_second_part(1), seq!['c', 'd']);
    assert_eq!(chars.split_second_part(3), Sequence::new());

    assert_eq!(seq.split_at(0), (seq![1], seq![2, 3]));
    assert_eq!(seq.split_at(2), (seq![1, 2, 3], Sequence::new()));

    assert_eq!(
        seq.try_split_at(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Splitting past the end should fail rather than clamp."
    );
    assert_panics!({ seq.split_first_part(3); });
    assert_panics!({ seq.split_second_part(3); });

    let empty: Sequence<i32> = Sequence::new();
    assert_eq!(
        empty.try_split_second_part(0),
        Err(IndexOutOfBounds { index: 0, len: 0 }),
        "A position past the end is never another way to get an empty second part."
    );
    assert_eq!(seq.try_split_second_part(2), Ok(Sequence::new()));
}

#[test]
fn test_insert() {
    let seq = seq![1, 2, 3];

    assert_eq!(seq.insert(0, 0), seq![0, 1, 2, 3], "Insert front");
    assert_eq!(seq.insert(seq.size(), 10), seq![1, 2, 3, 10], "Insert back");
    assert_eq!(seq.insert(1, 10), seq![1, 10, 2, 3], "Insert middle");
    assert_eq!(seq.insert(2, 10), seq![1, 2, 10, 3], "Insert middle");
    assert_eq!(Sequence::new().insert(0, 7), seq![7], "Insert into empty");

    let multi = seq![1, 2, 3, 5, 10];
    assert_eq!(multi.insert(0, -1), seq![-1, 1, 2, 3, 5, 10]);
    assert_eq!(multi.insert(multi.size(), -1), seq![1, 2, 3, 5, 10, -1]);
    assert_eq!(multi.insert(2, -1), seq![1, 2, -1, 3, 5, 10]);

    assert_eq!(seq.try_insert(4, 0), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_panics!({ seq.insert(4, 0); });
}

#[test]
fn test_erase() {
    let seq = seq![1, 2, 3];

    assert_eq!(seq.erase(&3), seq![1, 2]);
    assert_eq!(seq!['a', 'b', 'c', 'd'].erase(&'b'), seq!['a', 'c', 'd']);
    assert_eq!(
        seq.push_back(3).push_back(1).erase(&1),
        seq![2, 3, 3],
        "Erase should remove every matching element."
    );
    assert_eq!(
        seq.erase(&4),
        seq,
        "Erasing a missing element should return the original sequence unchanged."
    );

    assert_eq!(seq.erase_at(0), seq![2, 3], "Erasing front");
    assert_eq!(seq.erase_at(seq.size() - 1), seq![1, 2], "Erasing back");
    assert_eq!(seq.erase_at(1), seq![1, 3], "Erasing middle");
    assert_eq!(seq![1].erase_at(0), Sequence::new());

    assert_eq!(seq.try_erase_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_panics!({ seq.erase_at(3); });
}

#[test]
fn test_append() {
    let seq = seq![1, 2, 3];
    let more = seq![4, 5, 6];
    let most = seq![7, 8, 9];

    assert_eq!(seq.append(&more), seq![1, 2, 3, 4, 5, 6]);
    assert_eq!(more.append(&seq), seq![4, 5, 6, 1, 2, 3]);
    assert_eq!(seq.append_all([&more, &most]), Sequence::range_inclusive(1..=9));
    assert_eq!(seq.append_all(iter::empty()), seq, "Appending nothing is the identity.");
    assert_eq!(
        Sequence::concat([seq.clone(), Sequence::new(), more.clone()]),
        seq.append(&more)
    );
    assert_eq!(Sequence::<i32>::concat([]), Sequence::new());

    let bytes: Sequence<u8> = seq![1, 2];
    let wide: Sequence<i32> = seq![-1];
    assert_eq!(bytes.cast::<i32>().append(&wide), seq![1, 2, -1]);
}

#[test]
fn test_filter_transform_repeat_reverse() {
    let seq = seq![1, 2, 3];

    assert_eq!(seq.filter(|&x| x != 2), seq![1, 3]);
    assert_eq!(seq.filter(|_| false), Sequence::new());
    assert_eq!(seq.transform(|x| x * 2), seq![2, 4, 6]);
    assert_eq!(seq.transform(|x| x + 2).filter(|x| x % 2 == 1), seq![3, 5]);
    assert_eq!(
        seq.transform(|&x| char::from(b'a' + x as u8)),
        seq!['b', 'c', 'd'],
        "Transform may change the element type."
    );

    assert_eq!(seq.repeat(0), Sequence::new());
    assert_eq!(seq.repeat(1), seq);
    assert_eq!(seq.repeat(2), seq![1, 2, 3, 1, 2, 3]);
    assert_eq!(
        Sequence::<i32>::new().repeat(usize::MAX),
        Sequence::new(),
        "Repeating an empty sequence shouldn't depend on the count."
    );

    assert_eq!(seq.reverse(), seq![3, 2, 1]);
    assert_eq!(Sequence::range(0..3).reverse(), seq![2, 1, 0]);
    assert_eq!(seq.reverse().reverse(), seq);
}

#[test]
fn test_generators() {
    assert_eq!(Sequence::range(0..5), seq![0, 1, 2, 3, 4]);
    assert_eq!(Sequence::range(-3..3), seq![-3, -2, -1, 0, 1, 2]);
    assert_eq!(Sequence::range(5..5), Sequence::new());
    assert_eq!(Sequence::range_inclusive(-10..=20).size(), 31);
    assert_eq!(*Sequence::range_inclusive(-10..=20).front(), -10);
    assert_eq!(*Sequence::range_inclusive(-10..=20).back(), 20);
    assert_eq!(index_sequence(3), seq![0, 1, 2]);
    assert_eq!(index_sequence(0), Sequence::new());
}

#[test]
fn test_conversions() {
    let seq = seq![3, 1, 2];

    assert_eq!(&*seq.to_array(), &[3, 1, 2]);
    assert_eq!(seq.to_container::<Vec<_>>(), vec![3, 1, 2]);
    assert_eq!(seq.to_container::<VecDeque<_>>(), VecDeque::from([3, 1, 2]));
    assert_eq!(seq.to_container::<BTreeSet<_>>(), BTreeSet::from([1, 2, 3]));

    assert_eq!(Sequence::from(vec![3, 1, 2]), seq);
    assert_eq!(Sequence::from(&[3, 1, 2][..]), seq);
    assert_eq!(Sequence::from(seq.clone().into_array()), seq);
    assert_eq!(seq.iter().copied().collect::<Sequence<_>>(), seq);

    assert_eq!(seq.to_string(), "[3, 1, 2]");
    assert_eq!(
        format!("{:?}", seq),
        "Sequence { contents: [3, 1, 2], size: 3 }"
    );
}

#[test]
fn test_equality_and_hash() {
    let state = RandomState::new();

    assert_eq!(seq![1, 2, 3], Sequence::range_inclusive(1..=3));
    assert_ne!(seq![1, 2], seq![1, 2, 3], "Length is part of a sequence's identity.");
    assert_ne!(seq![1, 2, 3], seq![3, 2, 1], "Order is part of a sequence's identity.");
    assert_eq!(
        state.hash_one(seq![1, 2, 3]),
        state.hash_one(Sequence::range_inclusive(1..=3)),
        "Equal sequences should produce the same hash."
    );
}

#[test]
fn test_iteration_and_drop() {
    let seq = seq![1, 2, 3];
    let mut total = 0;
    for value in &seq {
        total += value;
    }
    assert_eq!(total, 6);
    assert_eq!(seq.into_iter().rev().collect::<Sequence<_>>(), seq![3, 2, 1]);

    let counter = CountedDrop::new(0);
    let seq: Sequence<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    let popped = seq.pop_front();
    assert_eq!(popped.size(), 3);

    drop(seq);
    assert_eq!(counter.take(), 4, "Dropping the original should only drop its own elements.");
    drop(popped);
    assert_eq!(counter.take(), 3, "The derived sequence owns independent copies.");
}

#[test]
fn test_checked_chaining() {
    fn middle_of_tail(seq: &Sequence<i32>) -> Result<i32, SequenceError> {
        let tail = seq.try_pop_front()?;
        Ok(*tail.try_at(tail.size() / 2)?)
    }

    assert_eq!(middle_of_tail(&seq![1, 2, 3, 4]), Ok(3));
    assert!(middle_of_tail(&seq![]).is_err_and(|e| e.is_empty_sequence()));
    assert!(middle_of_tail(&seq![1]).is_err_and(|e| e.is_index_out_of_bounds()));
}
