//! Park finder web application.

// dioxus components are snake case
#![allow(non_snake_case)]

pub mod app;
pub mod routes;
pub mod pages;
pub mod components;
pub(crate) mod api;
