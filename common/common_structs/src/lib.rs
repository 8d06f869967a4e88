#![no_std]

pub mod alias_types;

pub use alias_types::*;
