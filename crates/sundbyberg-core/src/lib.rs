#![forbid(unsafe_code)]

//! Core types shared by the Sundbyberg crates.
//!
//! Holds the error type, the namespace and element names of SOAP,
//! WS-Security, XML-DSig and ebMS 3, and the XML-DSig algorithm URIs.

pub mod algorithm;
pub mod error;
pub mod ns;

pub use error::{Error, Result};
