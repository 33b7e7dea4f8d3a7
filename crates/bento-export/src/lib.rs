#![forbid(unsafe_code)]

//! Export: deterministic markup generation from a layout.
//!
//! # Role in BentoGrid
//! `bento-export` turns a committed [`Layout`](bento_core::Layout) into a
//! self-contained markup string using fixed-size grid span/offset utility
//! classes. It is a pure function of the layout and grid dimensions: no
//! clock, no randomness, no ids leak into the output, so equal layouts
//! always produce byte-identical strings.
//!
//! Blocks are emitted in row-major reading order regardless of insertion
//! order; position is carried by explicit start/span directives per block,
//! so emission order only affects the sequence of elements and their
//! numbering comments.

pub mod markup;

pub use markup::generate;
