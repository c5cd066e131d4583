#![allow(clippy::new_without_default)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod config;
pub mod geodesy;
pub mod logs;
pub mod nav_processor;
pub mod pin;
pub mod session;
pub mod track_buffer;
pub mod utils;
pub mod wind;
