#![allow(dead_code, unused_imports)]

pub(crate) mod harness;

pub use harness::*;
