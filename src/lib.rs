#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod runner;
