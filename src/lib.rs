//! Smart Goal Breaker Frontend
//!
//! Leptos CSR client for the goal breakdown service: type a goal, get back an
//! ordered action plan with a complexity score, delete goals you are done with.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod models;
pub mod notify;
pub mod plan;
pub mod store;
