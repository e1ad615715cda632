// network/mod.rs
pub mod grid;
pub mod traffic_profile;
