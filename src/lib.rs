//! taskbe: a small task-tracking REST service.
//!
//! Tasks are kept in memory, in order, and every task's id is its current
//! position. Creating appends, replacing overwrites in place, and deleting
//! renumbers every later task so the ids stay dense.
//!
//! # Architecture
//!
//! - **Domain**: task records and validation, no infrastructure
//! - **Ports**: the storage contract the service depends on
//! - **Adapters**: the in-memory store
//! - **Gateway**: the axum router in [`http`]
//!
//! # Modules
//!
//! - [`task`]: domain, store, and service
//! - [`http`]: routes, wire types, and error mapping
//! - [`config`]: server settings from the environment

pub mod config;
pub mod http;
pub mod task;
