//! # IO Layer
//!
//! Everything that crosses a process boundary: HTTP clients for the
//! recruiting and holiday APIs, the concurrent page loader, DTO mappers and
//! the REST endpoints served to the frontend.

pub mod clients;
pub mod mappers;
pub mod page_loader;
pub mod rest;

pub use page_loader::{LoadError, LoadTicket, LoadTracker, PageData, PageLoader};
