// Nearby-college finder: haversine radius filter over a built-in college table.

pub mod catalog;
pub mod handlers;
pub mod radius;
