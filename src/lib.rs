//! # lazy_gen
//!
//! Resumable generators and lazy sequences built on explicit state machines.
//!
//! A generator is a `Resume` body wrapped by `GeneratorImpl`, which tracks the
//! `Created -> Suspended -> Done` run state. Once done, a generator keeps
//! signaling exhaustion and its body is never resumed again.
//!
//! ```
//! use lazy_gen::{counter, single_yield, Error};
//!
//! let mut g = single_yield();
//! assert_eq!(g.produce_next(), Ok(1));
//! assert_eq!(g.produce_next(), Err(Error::Done));
//!
//! let mut count = counter();
//! assert_eq!(count.next(), Some(0));
//! assert_eq!(count.next(), Some(1));
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate log;

mod gen_impl;
mod generator;
mod rt;
mod samples;
mod scope;
mod sequence;

pub mod demo;

pub use crate::gen_impl::{Generator, GeneratorImpl, Gn};
pub use crate::generator::{produce_next, GeneratorState, Resume};
pub use crate::rt::{Error, State};
pub use crate::samples::{counter, single_yield, Counter, SingleYield};
pub use crate::scope::Scope;
pub use crate::sequence::{Cursor, Sequence};
