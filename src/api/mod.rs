//! # API Module
//!
//! Contains the HTTP API of the batch mint service.
//!
//! ## Structure
//!
//! * `controllers` - Request handling and business logic
//! * `routes` - API endpoint definitions and routing
//! * `middleware` - HTTP middleware for request timeouts

pub mod controllers;

pub mod middleware;

pub mod routes;
