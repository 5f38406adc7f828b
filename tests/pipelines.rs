use std::cell::Cell;

use indexmap::IndexMap;
use transducers::{
    compose, eager, into, iterate, seq, to_iter, to_map, to_vec, transduce, transformer,
    xform::{cat, dedupe, drop, drop_while, filter, keep, map, mapcat, partition, take, take_while},
    Container, Identity, Reducible, Reshape, Step, Transformer,
};

/// A list that is frozen once built; appending to a frozen list copies it.
#[derive(Debug, Clone, PartialEq)]
struct FrozenList<T> {
    items: Vec<T>,
    frozen: bool,
}

impl<T> FrozenList<T> {
    fn of(items: Vec<T>) -> Self {
        FrozenList {
            items,
            frozen: true,
        }
    }
}

struct FrozenListBuilder;

impl<T: Clone> Transformer<T> for FrozenListBuilder {
    type Acc = FrozenList<T>;

    fn init(&mut self) -> transducers::Result<FrozenList<T>> {
        Ok(FrozenList {
            items: Vec::new(),
            frozen: false,
        })
    }

    fn step(&mut self, acc: FrozenList<T>, input: T) -> Step<FrozenList<T>> {
        let mut items = if acc.frozen { acc.items.clone() } else { acc.items };
        items.push(input);
        Step::Continue(FrozenList {
            items,
            frozen: false,
        })
    }

    fn result(&mut self, acc: FrozenList<T>) -> FrozenList<T> {
        FrozenList::of(acc.items)
    }
}

impl<T: Clone> Container for FrozenList<T> {
    type Item = T;
    type Builder = FrozenListBuilder;

    fn empty() -> Self {
        FrozenList::of(Vec::new())
    }

    fn builder() -> FrozenListBuilder {
        FrozenListBuilder
    }
}

impl<T> Reducible for FrozenList<T> {
    type Item = T;

    fn reduce_with<X>(self, xf: &mut X, mut acc: X::Acc) -> Step<X::Acc>
    where
        X: Transformer<T>,
    {
        for item in self.items {
            match xf.step(acc, item) {
                Step::Continue(next) => acc = next,
                reduced => return reduced,
            }
        }
        Step::Continue(acc)
    }
}

impl<T, U: Clone> Reshape<U> for FrozenList<T> {
    type Output = FrozenList<U>;
}

fn push<T>(mut acc: Vec<T>, x: T) -> Vec<T> {
    acc.push(x);
    acc
}

fn xy(x: i32, y: i32) -> IndexMap<&'static str, i32> {
    [("x", x), ("y", y)].into_iter().collect()
}

#[test]
fn test_third_party_transformer_protocol() {
    let mut builder = FrozenList::<i32>::builder();
    let empty: FrozenList<i32> = builder.init().unwrap();
    assert_eq!(empty, FrozenList { items: vec![], frozen: false });

    let grown = builder.step(FrozenList::of(vec![1, 2, 3]), 4).into_inner();
    assert_eq!(grown.items, vec![1, 2, 3, 4]);
}

#[test]
fn test_third_party_container_keeps_its_shape() {
    let out = eager::map(FrozenList::of(vec![1, 2, 3, 4]), |x: i32| x + 1);
    assert_eq!(out, FrozenList::of(vec![2, 3, 4, 5]));

    let out = eager::filter(FrozenList::of(vec![1, 2, 3, 4]), |x: &i32| x % 2 == 0);
    assert_eq!(out, FrozenList::of(vec![2, 4]));

    let chunks = eager::partition(FrozenList::of(vec![1, 2, 3, 4, 5]), 2);
    assert_eq!(chunks, FrozenList::of(vec![vec![1, 2], vec![3, 4], vec![5]]));
}

#[test]
fn test_into_third_party_target_is_finalized() {
    let out = into(FrozenList::empty(), map(|x: i32| x + 1), vec![1, 2, 3]);
    assert_eq!(out, FrozenList::of(vec![2, 3, 4]));

    let out = into(FrozenList::empty(), cat(), vec![vec![1, 2], vec![3, 4]]);
    assert!(out.frozen);
    assert_eq!(out.items, vec![1, 2, 3, 4]);
}

#[test]
fn test_transduce_into_third_party_transformer() {
    let xf = compose(map(|x: i32| x + 1), filter(|x: &i32| x % 2 == 0));
    let out = transduce(FrozenList::of(vec![1, 2, 3, 4]), xf, FrozenListBuilder, FrozenList::empty());
    assert_eq!(out, FrozenList::of(vec![2, 4]));
}

#[test]
fn test_map_filter_remove_over_mapping() {
    let out = eager::map(xy(1, 2), |(k, v): (&'static str, i32)| (k, v + 1));
    assert_eq!(out, xy(2, 3));

    let out = eager::filter(xy(1, 2), |(_, v): &(&str, i32)| v % 2 == 0);
    assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![("y", 2)]);

    let out = eager::remove(xy(1, 2), |(_, v): &(&str, i32)| v % 2 == 0);
    assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![("x", 1)]);
}

#[test]
fn test_closure_context_replaces_bound_receiver() {
    let num = 5;
    let out: Vec<i32> = seq(vec![1, 2, 3, 4], map(move |x: i32| x + num));
    assert_eq!(out, vec![6, 7, 8, 9]);

    let out = eager::take_while(vec![4, 5, 6], |x: &i32| *x < num);
    assert_eq!(out, vec![4]);
    let out = eager::drop_while(vec![4, 5, 6], |x: &i32| *x < num);
    assert_eq!(out, vec![5, 6]);

    let out = into(Vec::new(), mapcat(|row: Vec<i32>| eager::map(row, |x: i32| x + num)), vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(out, vec![6, 7, 8, 9]);
}

#[test]
fn test_stateful_transforms_through_into() {
    assert_eq!(into(Vec::new(), dedupe(), vec![1, 2, 2, 3, 3, 3, 5]), vec![1, 2, 3, 5]);
    assert_eq!(
        into(Vec::new(), keep(), vec![Some(1), Some(2), None, None, Some(5)]),
        vec![1, 2, 5]
    );
    assert_eq!(into(Vec::new(), take(2), vec![1, 2, 3, 4]), vec![1, 2]);
    assert_eq!(into(Vec::new(), take_while(|x: &i32| *x < 3), vec![1, 2, 3, 2]), vec![1, 2]);
    assert_eq!(into(Vec::new(), drop(2), vec![1, 2, 3, 4]), vec![3, 4]);
    assert_eq!(into(Vec::new(), drop_while(|x: &i32| *x < 3), vec![1, 2, 3, 2]), vec![3, 2]);
}

#[test]
fn test_partition_respects_early_termination() {
    assert_eq!(into(Vec::new(), partition(2), vec![1, 2, 3, 4]), vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(
        into(Vec::new(), partition(2), vec![1, 2, 3, 4, 5]),
        vec![vec![1, 2], vec![3, 4], vec![5]]
    );
    assert_eq!(
        into(Vec::new(), compose(partition(2), take(2)), vec![1, 2, 3, 4, 5]),
        vec![vec![1, 2], vec![3, 4]]
    );
    assert_eq!(
        into(Vec::new(), compose(partition(2), take(3)), vec![1, 2, 3, 4, 5]),
        vec![vec![1, 2], vec![3, 4], vec![5]]
    );
}

#[test]
fn test_into_across_shapes() {
    assert_eq!(into(Vec::new(), map(|x: i32| x + 1), vec![1, 2, 3, 4]), vec![2, 3, 4, 5]);
    assert_eq!(into(Vec::new(), map(|(_, v): (&str, i32)| v + 1), xy(10, 20)), vec![11, 21]);
    assert_eq!(into(IndexMap::new(), map(|(k, v): (&'static str, i32)| (k, v + 1)), xy(10, 20)), xy(11, 21));

    let keyed: IndexMap<String, i32> = into(IndexMap::new(), map(|x: i32| (format!("foo{x}"), x * 2)), vec![1, 2]);
    assert_eq!(keyed.into_iter().collect::<Vec<_>>(), vec![("foo1".to_string(), 2), ("foo2".to_string(), 4)]);

    assert_eq!(into(vec![1, 2, 3], map(|x: i32| x + 1), vec![7, 8, 9]), vec![1, 2, 3, 8, 9, 10]);
}

#[test]
fn test_transduce_and_compose() {
    let xf = compose(map(|x: i32| x + 1), filter(|x: &i32| x % 2 == 0));
    assert_eq!(transduce(vec![1, 2, 3, 4], xf, transformer(push), Vec::new()), vec![2, 4]);

    let xf = compose(map(|(_, v): (&str, i32)| v), map(|x: i32| x + 1));
    assert_eq!(transduce(xy(1, 2), xf, transformer(push), Vec::new()), vec![2, 3]);

    let merge = |mut acc: IndexMap<String, i32>, (k, v): (String, i32)| {
        acc.insert(k, v);
        acc
    };
    let xf = compose!(
        map(|(_, v): (&str, i32)| v),
        map(|x: i32| x + 1),
        map(|x: i32| (format!("foo{x}"), x)),
    );
    let out = transduce(xy(1, 2), xf, transformer(merge), IndexMap::new());
    assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![("foo2".to_string(), 2), ("foo3".to_string(), 3)]);

    let xf = compose!(map(|x: i32| vec![x, x * 2]), cat(), filter(|x: &i32| *x > 2));
    assert_eq!(into(Vec::new(), xf, vec![1, 2, 3, 4]), vec![4, 3, 6, 4, 8]);
}

#[test]
fn test_to_vec_and_to_map() {
    let out: Vec<i32> = to_vec([1, 2, 3], Identity);
    assert_eq!(out, vec![1, 2, 3]);
    let out: Vec<i32> = to_vec(vec![1, 2, 3, 4], take(3));
    assert_eq!(out, vec![1, 2, 3]);

    let nums = iterate(0..);
    let out: Vec<i32> = to_vec(nums, take(6));
    assert_eq!(out, vec![0, 1, 2, 3, 4, 5]);

    let out = to_map(vec![("foo", 1), ("bar", 2)], Identity);
    assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![("foo", 1), ("bar", 2)]);
}

#[test]
fn test_lazy_iterator_feeds_another_pipeline() {
    let pulls = Cell::new(0);
    let nums = (0..).inspect(|_| pulls.set(pulls.get() + 1));
    let doubled = to_iter(nums, map(|x: i32| x * 2));
    let out: Vec<i32> = to_vec(doubled, take(5));
    assert_eq!(out, vec![0, 2, 4, 6, 8]);
    assert_eq!(pulls.get(), 5);
}
