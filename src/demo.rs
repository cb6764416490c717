//! # demo
//!
//! console walkthrough of eager sequences, cursors and generators
//!

use std::fmt::Display;
use std::io::{self, Write};

use crate::generator::produce_next;
use crate::samples::{counter, single_yield};
use crate::sequence::Sequence;

/// write the first item of `iterable` and stop
///
/// a fresh traversal is started for containers, a shared iterator passed as
/// `&mut` is advanced by one. Returns `false` when there was nothing to write.
pub fn print_first<I, W>(iterable: I, out: &mut W) -> io::Result<bool>
where
    I: IntoIterator,
    I::Item: Display,
    W: Write + ?Sized,
{
    match iterable.into_iter().next() {
        Some(x) => {
            writeln!(out, "{}", x)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// advance `it` once and write the value or the exhaustion sentinel
pub fn print_next<I, W>(it: &mut I, out: &mut W) -> io::Result<()>
where
    I: Iterator + ?Sized,
    I::Item: Display,
    W: Write + ?Sized,
{
    match produce_next(it) {
        Ok(v) => writeln!(out, "{}", v),
        Err(e) => writeln!(out, "{}", e),
    }
}

/// run the whole walkthrough
pub fn run<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    // default traversal of an eager container
    let a = Sequence::from(vec![1, 2, 3]);
    for i in &a {
        writeln!(out, "{}", i)?;
    }

    // explicit cursor, exhausted after two values
    let a = Sequence::from(vec![1, 2]);
    let mut itr = a.iter();
    for _ in 0..3 {
        print_next(&mut itr, out)?;
    }

    // restart on the container, shared position on the cursor
    let mut b = a.iter();
    for _ in 0..3 {
        print_first(&a, out)?;
    }
    for _ in 0..3 {
        if !print_first(&mut b, out)? {
            debug!("shared cursor already exhausted");
        }
    }

    let mut g = single_yield();
    writeln!(out, "{:?}", g)?;
    print_next(&mut g, out)?;
    print_next(&mut g, out)?;

    // two instances of one generator function
    let mut g1 = single_yield();
    let mut g2 = single_yield();
    print_next(&mut g1, out)?;
    print_next(&mut g1, out)?;
    print_next(&mut g2, out)?;
    print_next(&mut g2, out)?;

    let mut count = counter();
    print_next(&mut count, out)?;
    print_next(&mut count, out)?;

    out.flush()
}
