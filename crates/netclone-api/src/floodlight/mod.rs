// Floodlight REST API client modules
//
// Hand-written client for the three read-only collections a topology snapshot
// needs: connected switches, known end-host devices, and inter-switch links.

pub mod client;
pub mod devices;
pub mod models;
pub mod switches;
pub mod topology;

pub use client::FloodlightClient;
