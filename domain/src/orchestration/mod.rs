//! Run lifecycle

pub mod state;
