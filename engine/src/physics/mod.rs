pub mod bounds_system;
pub mod collision_system;
pub mod movement_system;
