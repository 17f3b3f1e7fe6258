use itertools::multizip;
use iterzip::cursor::RandomAccessCursor;
use iterzip::prelude::*;
use iterzip::Capability;
use proptest::prelude::*;

use std::collections::LinkedList;

fn capability() -> impl Strategy<Value = Capability> {
    prop_oneof![
        Just(Capability::InputOutput),
        Just(Capability::Forward),
        Just(Capability::Bidirectional),
        Just(Capability::RandomAccess),
    ]
}

proptest! {
    #[test]
    fn matches_multizip(
        a in proptest::collection::vec(any::<i32>(), 0..32),
        b in proptest::collection::vec(any::<u8>(), 0..32),
        c in proptest::collection::vec(any::<bool>(), 0..32),
    ) {
        let ours: Vec<_> = (&a, &b, &c).zip().values().collect();
        let theirs: Vec<_> = multizip((a.iter().copied(), b.iter().copied(), c.iter().copied())).collect();
        prop_assert_eq!(ours, theirs);
    }

    #[test]
    fn length_is_the_shortest(
        a in proptest::collection::vec(any::<u16>(), 0..48),
        b in proptest::collection::vec(any::<u16>(), 0..48),
    ) {
        let range = (&a, &b).zip();
        let shortest = a.len().min(b.len());
        prop_assert_eq!(range.len(), shortest);
        prop_assert_eq!(range.is_empty(), shortest == 0);
        prop_assert_eq!(range.iter().count(), shortest);
    }

    #[test]
    fn reverse_traversal_mirrors_forward(
        a in proptest::collection::vec(any::<i64>(), 0..32),
        b in proptest::collection::vec(any::<char>(), 0..32),
    ) {
        let range = (&a, &b).zip();
        let mut forward: Vec<_> = range.values().collect();
        forward.reverse();
        let backward: Vec<_> = range.values().rev().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn indexing_agrees_with_the_sources(
        a in proptest::collection::vec(any::<u32>(), 1..32),
        b in proptest::collection::vec(any::<u32>(), 1..32),
        seed in any::<usize>(),
    ) {
        let range = (&a, &b).zip();
        let n = seed % a.len().min(b.len());
        let begin = range.begin();
        let offset = n as isize;
        prop_assert_eq!(begin.read_at(offset), (a[n], b[n]));
        prop_assert_eq!((begin + offset).distance_to(&begin), -offset);
        prop_assert!(begin <= begin + offset);
    }

    #[test]
    fn forward_sources_match_multizip(
        a in proptest::collection::vec(any::<u8>(), 0..24),
        b in proptest::collection::vec(any::<u8>(), 0..24),
    ) {
        let list: LinkedList<u8> = a.iter().copied().collect();
        let ours: Vec<_> = (&list, &b).zip().values().map(|(x, y)| (*x, y)).collect();
        let theirs: Vec<_> = multizip((a.iter().copied(), b.iter().copied())).collect();
        prop_assert_eq!(ours, theirs);
    }

    #[test]
    fn writes_land_in_every_prefix_slot(
        mut a in proptest::collection::vec(any::<i16>(), 0..32),
        b in proptest::collection::vec(any::<i16>(), 0..32),
    ) {
        let original = a.clone();
        for (x, y) in (&mut a, &b).zip() {
            x.set(*y);
        }
        let shortest = original.len().min(b.len());
        prop_assert_eq!(&a[..shortest], &b[..shortest]);
        prop_assert_eq!(&a[shortest..], &original[shortest..]);
    }

    #[test]
    fn meet_is_the_minimum(lhs in capability(), rhs in capability(), third in capability()) {
        prop_assert_eq!(lhs.meet(rhs), lhs.min(rhs));
        prop_assert_eq!(lhs.meet(rhs), rhs.meet(lhs));
        prop_assert_eq!(lhs.meet(rhs).meet(third), lhs.meet(rhs.meet(third)));
        prop_assert_eq!(Capability::weakest(&[lhs, rhs, third]), Some(lhs.min(rhs).min(third)));
        prop_assert!(lhs.supports(lhs.meet(rhs)));
    }
}
