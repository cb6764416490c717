//! # samples
//!
//! sample generator functions written as explicit state machines
//!

use crate::gen_impl::{Generator, Gn};
use crate::generator::{GeneratorState, Resume};

/// resumption points of `single_yield`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum SingleYieldTag {
    Start,
    AfterYield,
    End,
}

/// body that yields `1` once and then returns
#[derive(Debug)]
pub struct SingleYield {
    tag: SingleYieldTag,
}

impl SingleYield {
    fn new() -> Self {
        SingleYield {
            tag: SingleYieldTag::Start,
        }
    }
}

impl Resume for SingleYield {
    type Yield = u64;

    fn resume(&mut self) -> GeneratorState<u64> {
        match self.tag {
            SingleYieldTag::Start => {
                self.tag = SingleYieldTag::AfterYield;
                GeneratorState::Yielded(1)
            }
            SingleYieldTag::AfterYield | SingleYieldTag::End => {
                self.tag = SingleYieldTag::End;
                GeneratorState::Complete
            }
        }
    }
}

/// generator yielding `1` once, the second advance signals exhaustion
///
/// every call creates an independent instance
///
/// ```
/// use lazy_gen::{single_yield, Error};
///
/// let mut g = single_yield();
/// assert_eq!(g.produce_next(), Ok(1));
/// assert_eq!(g.produce_next(), Err(Error::Done));
/// ```
pub fn single_yield() -> Generator<'static, u64> {
    Gn::from_resume(SingleYield::new())
}

/// resumption points of `counter`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum CounterTag {
    Start,
    AfterYield,
}

/// body counting up from zero forever
#[derive(Debug)]
pub struct Counter {
    tag: CounterTag,
    c: u64,
}

impl Counter {
    fn new() -> Self {
        Counter {
            tag: CounterTag::Start,
            c: 0,
        }
    }
}

impl Resume for Counter {
    type Yield = u64;

    fn resume(&mut self) -> GeneratorState<u64> {
        match self.tag {
            CounterTag::Start => {
                self.c = 0;
                self.tag = CounterTag::AfterYield;
            }
            CounterTag::AfterYield => {
                self.c = self.c.wrapping_add(1);
            }
        }
        GeneratorState::Yielded(self.c)
    }
}

/// infinite generator returning 0, 1, 2, ...
///
/// ```
/// use lazy_gen::counter;
///
/// let count = counter();
/// assert_eq!(count.take(3).collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub fn counter() -> Generator<'static, u64> {
    Gn::from_resume(Counter::new())
}
