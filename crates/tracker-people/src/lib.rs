//! # tracker-people
//!
//! Client for the external people lookup service that enriches new users
//! with their name and address.

pub mod client;

pub use client::HttpPeopleDirectory;
