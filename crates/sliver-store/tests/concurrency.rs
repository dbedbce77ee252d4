//! Views shared across threads: concurrent readers, serialised writers.

use std::sync::Barrier;
use std::thread;

use sliver_store::{copy_into, SliceView};

#[test]
fn concurrent_readers_see_consistent_data() {
    let v: SliceView<u64> = (0..1000).collect();
    thread::scope(|scope| {
        for _ in 0..4 {
            let view = v.clone();
            scope.spawn(move || {
                let sum: u64 = view.iter().sum();
                assert_eq!(sum, 999 * 1000 / 2);
            });
        }
    });
}

#[test]
fn disjoint_writers_through_subviews() {
    let v = SliceView::<u32>::make(400);
    let barrier = Barrier::new(4);
    thread::scope(|scope| {
        for t in 0..4u32 {
            let part = v.subview(t as usize * 100, (t as usize + 1) * 100).unwrap();
            let barrier = &barrier;
            scope.spawn(move || {
                barrier.wait();
                for i in 0..part.len() {
                    part.set(i, t).unwrap();
                }
            });
        }
    });
    for t in 0..4u32 {
        let part = v.subview(t as usize * 100, (t as usize + 1) * 100).unwrap();
        assert!(part.iter().all(|x| x == t));
    }
}

#[test]
fn opposing_copies_do_not_deadlock() {
    let a = SliceView::from(vec![1u32; 256]);
    let b = SliceView::from(vec![2u32; 256]);
    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..200 {
                copy_into(&a, &b);
            }
        });
        scope.spawn(|| {
            for _ in 0..200 {
                copy_into(&b, &a);
            }
        });
    });
    // Every copy moves a whole store's worth, so each ends uniform.
    let first = a.get(0).unwrap();
    assert!(a.iter().all(|x| x == first));
}
