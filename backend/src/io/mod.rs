//! Interface layer exposing the domain to the browser client.

pub mod rest;
