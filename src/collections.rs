//! Implementations of bit-packed structures.

//  Design considerations
//
//  #   Why a boxed slice?
//
//  The length of a `BitVector` is fixed at construction, hence so is its number of words. A `Box<[BitWordRaw]>` states
//  as much, and cannot be accidentally grown by a push.

pub mod bit_vector;

pub use bit_vector::{BitVector, Iter, Ones};
