//! # VITA 49
//!
//! vita49 is a Rust implementation of the binary encoding of the VITA 49
//! Radio Transport (VRT) packet metadata. VRT packets carry digitized signal
//! data together with context and command packets that describe and control
//! the devices that produce it. This crate provides the structures found in
//! the headers, trailers and context and command fields of these packets, and
//! encodes and decodes them to and from their big-endian wire format.
//!
//! Every structure implements the [`Field`] trait, which gives its size on the
//! wire and packs it into or unpacks it from a caller-supplied buffer. The
//! 32-bit indicator words (CIF0, CIF1, CIF2, CIF3, CIF7, CAM, ...) implement
//! additionally the [`IndicatorWord`] trait, which gives access to their flags
//! by name. Assembling whole packets is outside of the scope of this crate.
//!
//! This crate does not depend on `std`, but it uses `alloc` for the fields
//! that have a variable length.
//!
//! ## Logging
//!
//! The vita49 crate uses the [log](https://docs.rs/log/latest/log/) crate to
//! log the decoding of variable-length fields and indicator words, and the
//! values that are clamped or truncated while encoding.
//!
//! ## Features
//!
//! When built with the default features, the crate does not require
//! `std`. Additionally, the crate supports the following features:
//! * `std`. This implements `std::error::Error` for [`Error`].

#![warn(missing_docs)]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod association;
pub mod cif0;
pub mod cif1;
pub mod cif2;
pub mod cif3;
pub mod cif7;
pub mod class_id;
pub mod command;
mod field;
pub use field::{Error, Field, Result};
pub mod fixed;
pub mod geolocation;
pub mod header;
pub mod index_list;
mod indicator;
pub use indicator::{IndicatorWord, SetFlags};
pub mod sector_scan;
pub mod spectrum;
pub mod state_event;
