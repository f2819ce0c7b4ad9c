//! Command implementations for ranq

pub mod dispatch;
pub mod items;
pub mod priorities;
pub mod rank;
