//! ballout-kicad: vendor ballout tables to multi-unit KiCad symbols
//!
//! Reads an FPGA vendor pinout CSV and produces one legacy KiCad schematic
//! symbol per package variant, with one unit per IO bank.
//!
//! # Modules
//!
//! - [`ballout`] — Ballout CSV parsing and package views
//! - [`generator`] — Bank grouping, signal ordering, pin layout
//! - [`kicad`] — Symbol model and record writer
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Configuration error types

pub mod ballout;
pub mod config;
pub mod error;
pub mod generator;
pub mod kicad;
