//! NYC subway art API server.
//!
//! Joins the MTA station catalog with the permanent art catalog and serves
//! read-only queries over the result: artworks by ID or borough, and
//! stations annotated with the art installed in them.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod join;
pub mod load;
pub mod query;
pub mod sources;
pub mod web;
