#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # geoaddr-entities
//!
//! Reusable, agnostic domain entities for the geoaddr address service.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod address;
pub mod delivery;
pub mod geo;
pub mod id;
pub mod time;
pub mod user;
