//! # UAC Rust Backend
//!
//! Aggregation and view-selection engine for university admission catalogs.
//!
//! This crate provides the data core for a catalog/filter UI over Taiwanese
//! university admission programs across two channels (繁星推薦 merit
//! recommendation and 個人申請 individual application). It offers typed
//! domain records, an in-memory dataset repository, and pure derivation
//! functions that turn the flat catalog into the grouped, filtered and
//! sorted structures a front end renders.
//!
//! ## Features
//!
//! - **Data Loading**: Parse admission catalogs from JSON format
//! - **Eligibility Projection**: Flat (university, department) pairs per channel
//! - **Filtering**: Free-text, city, school-type and exam-group predicates
//! - **Grouping**: By school and by cross-university department name
//! - **Detail Views**: Multi-year stacking and two-round cutoff tables
//! - **Session State**: Explicit browse/filter/drill-down state container
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and the consolidated DTO surface
//! - [`models`]: Domain records and the catalog JSON loader
//! - [`db`]: Dataset repository pattern and the in-memory backend
//! - [`services`]: Pure aggregation functions (the derivation engine)
//! - [`views`]: Derived view structures handed to the presentation layer
//! - [`session`]: Browse-session state and wholesale view derivation
//!
//! Every derivation is a total, synchronous function over the immutable
//! catalog: derived structures borrow from the stored dataset and are
//! rebuilt wholesale on each qualifying state change.

pub mod api;

pub mod db;
pub mod models;

pub mod services;
pub mod session;
pub mod views;
