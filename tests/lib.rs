use lazy_gen::demo::{print_first, run};
use lazy_gen::*;

#[test]
fn sequence_default_iteration() {
    let a = Sequence::from(vec![1, 2, 3]);
    let v: Vec<i32> = (&a).into_iter().copied().collect();
    assert_eq!(v, vec![1, 2, 3]);

    // a second traversal starts over
    let mut out = Vec::new();
    for i in &a {
        out.push(*i);
    }
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn cursor_exhaustion() {
    let a = Sequence::from(vec![1, 2]);
    let mut itr = a.iter();
    assert_eq!(itr.produce_next(), Ok(&1));
    assert_eq!(itr.produce_next(), Ok(&2));
    assert_eq!(itr.produce_next(), Err(Error::Done));
    // exhaustion is terminal
    assert_eq!(itr.produce_next(), Err(Error::Done));
    assert_eq!(itr.remaining(), 0);

    // the container still sees every value
    assert_eq!(a.iter().count(), 2);
}

#[test]
fn cursors_are_independent() {
    let a: Sequence<i32> = (1..=2).collect();
    let mut c1 = a.iter();
    let c2 = a.iter();

    assert_eq!(c1.next(), Some(&1));
    assert_eq!(c1.position(), 1);
    assert_eq!(c2.position(), 0);
    assert_eq!(c2.len(), 2);
}

#[test]
fn print_first_restarts_on_container() {
    let a = Sequence::from(vec![1, 2]);
    let mut out = Vec::new();
    for _ in 0..3 {
        assert!(print_first(&a, &mut out).unwrap());
    }
    assert_eq!(String::from_utf8(out).unwrap(), "1\n1\n1\n");
}

#[test]
fn print_first_advances_shared_iterator() {
    let a = Sequence::from(vec![1, 2]);
    let mut b = a.iter();
    let mut out = Vec::new();
    assert!(print_first(&mut b, &mut out).unwrap());
    assert!(print_first(&mut b, &mut out).unwrap());
    assert!(!print_first(&mut b, &mut out).unwrap());
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n");
}

#[test]
fn single_yield_is_done() {
    let mut g = single_yield();
    assert_eq!(g.state(), State::Created);
    assert_eq!(g.produce_next(), Ok(1));
    assert_eq!(g.state(), State::Suspended);
    assert!(!g.is_done());
    assert_eq!(g.produce_next(), Err(Error::Done));
    assert!(g.is_done());
    assert_eq!(g.next(), None);
}

#[test]
fn single_yield_instances_are_independent() {
    let mut g1 = single_yield();
    let mut g2 = single_yield();
    assert_eq!(g1.next(), Some(1));
    assert_eq!(g1.next(), None);
    assert_eq!(g2.next(), Some(1));
    assert_eq!(g2.next(), None);
}

#[test]
fn counter_never_done() {
    let mut count = counter();
    for i in 0..10_000u64 {
        assert_eq!(count.produce_next(), Ok(i));
    }
    assert!(!count.is_done());
}

#[test]
fn counter_resume_later() {
    let mut count = counter();
    let head: Vec<u64> = count.by_ref().take(3).collect();
    assert_eq!(head, vec![0, 1, 2]);
    // picks up where it left off
    assert_eq!(count.next(), Some(3));
}

#[test]
fn test_scoped() {
    let mut i = 0;
    let mut g = Gn::new_scoped(move |s| {
        if i < 3 {
            s.yield_with(i * 10);
            i += 1;
        }
    });

    assert_eq!(g.next(), Some(0));
    assert_eq!(g.next(), Some(10));
    assert_eq!(g.next(), Some(20));
    assert_eq!(g.next(), None);
    assert!(g.is_done());
}

#[test]
fn test_done_macro() {
    let mut g = Gn::<u32>::new_scoped(|s| {
        if s.has_yielded() {
            return;
        }
        done!();
    });
    assert_eq!(g.next(), None);
    assert_eq!(g.state(), State::Done);
}

#[test]
fn test_yield_twice_keeps_last() {
    let mut g = Gn::new_scoped(|s| {
        s.yield_with(1);
        s.yield_with(2);
    });
    assert_eq!(g.next(), Some(2));
}

#[test]
fn body_not_resumed_after_done() {
    use std::cell::Cell;
    use std::rc::Rc;

    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    let mut g = Gn::new_scoped(move |s| {
        c.set(c.get() + 1);
        // yields on every call except the first
        if c.get() > 1 {
            s.yield_with(c.get());
        }
    });

    assert_eq!(g.next(), None);
    assert_eq!(g.next(), None);
    assert_eq!(calls.get(), 1);
}

struct Countdown {
    n: u32,
}

impl Resume for Countdown {
    type Yield = u32;

    fn resume(&mut self) -> GeneratorState<u32> {
        if self.n == 0 {
            return GeneratorState::Complete;
        }
        self.n -= 1;
        GeneratorState::Yielded(self.n + 1)
    }
}

#[test]
fn test_from_resume() {
    let g = Gn::from_resume(Countdown { n: 3 });
    assert_eq!(g.collect::<Vec<_>>(), vec![3, 2, 1]);

    let mut body = Countdown { n: 1 };
    {
        let mut g = Gn::from_resume(&mut body);
        assert_eq!(g.produce_next(), Ok(1));
        assert_eq!(g.produce_next(), Err(Error::Done));
    }
    assert_eq!(body.n, 0);
}

#[test]
fn test_cancel() {
    let mut count = counter();
    assert_eq!(count.next(), Some(0));
    count.cancel();
    assert!(count.is_done());
    assert_eq!(count.produce_next(), Err(Error::Done));
    count.cancel();
    assert_eq!(count.state(), State::Done);
}

#[test]
fn error_display() {
    assert_eq!(Error::Done.to_string(), "StopIteration");
    assert_eq!(produce_next(&mut std::iter::empty::<u8>()), Err(Error::Done));
}

#[test]
fn generator_debug() {
    let g = single_yield();
    assert_eq!(format!("{:?}", g), "Generator<Output=u64> { state: created }");
}

#[test]
fn walkthrough_transcript() {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    let expected = "\
1
2
3
1
2
StopIteration
1
1
1
1
2
Generator<Output=u64> { state: created }
1
StopIteration
1
StopIteration
1
StopIteration
0
1
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
