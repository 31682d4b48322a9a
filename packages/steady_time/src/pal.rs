//! Platform abstraction layer for the monotonic time source.
//!
//! Public API types talk to the time source only through [`TimeSourceFacade`], which lets
//! tests substitute mock and fake time sources without touching the public API.

mod abstractions;
mod facade;
mod rust;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
pub(crate) use rust::*;

#[cfg(test)]
mod fake;
#[cfg(test)]
pub(crate) use fake::*;
