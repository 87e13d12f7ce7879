//! VectorGate — URL indexing gateway for a vector-search backend.
//!
//! This crate provides the gateway library: it accepts batches of URLs over
//! HTTP, validates them, resolves the submitting user, forwards each URL to
//! the configured vector backend concurrently, and aggregates the per-URL
//! outcomes into a single response.
//!
//! # Modules
//!
//! - [`config`] — Startup configuration resolved from the environment
//! - [`types`] — Wire types, app state, and shared helpers
//! - [`users`] — User lookup trait and the TOML-backed store
//! - [`index`] — Fan-out client for the vector backend
//! - [`api`] — HTTP API handlers

pub mod api;
pub mod config;
pub mod index;
pub mod types;
pub mod users;
