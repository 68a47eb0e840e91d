#![forbid(unsafe_code)]

pub use sundbyberg_core as core;
pub use sundbyberg_ebms as ebms;
pub use sundbyberg_wss as wss;
pub use sundbyberg_xml as xml;
