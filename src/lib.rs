#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod maze;
mod validation;
pub mod walkable;
#[cfg(feature = "std")]
pub mod client;
#[cfg(feature = "std")]
pub mod domain;
#[cfg(feature = "std")]
pub mod gateway;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod navigator;
#[cfg(feature = "std")]
mod session;
pub mod prelude;

pub use common::*;
pub use config::*;
pub use maze::*;
pub use validation::*;
pub use walkable::{resolve, Neighbor};
#[cfg(feature = "std")]
pub use client::{GameSummary, MazeClient, MoveLoopExit};
#[cfg(feature = "std")]
pub use gateway::{GatewayError, HttpGateway, InMemoryGateway, MazeGateway};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use navigator::{
    AutoNavigator, CliNavigator, Dimension, GameChoice, MainChoice, MoveChoice, Navigator,
};
#[cfg(feature = "std")]
pub use session::MazeSession;
