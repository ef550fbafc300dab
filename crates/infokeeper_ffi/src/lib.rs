//! Flutter-facing bindings for the InfoKeeper core.

pub mod api;
