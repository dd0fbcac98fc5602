#![allow(async_fn_in_trait)]

pub mod cli;
pub mod config;
pub mod entities;
pub mod error;
pub mod seed;
pub mod selection;
pub mod storage;
pub mod store;
pub mod upload;
pub mod utils;
