//! Starting and stopping the actors that make up the inventory.

pub mod inventory_system;

pub use inventory_system::InventorySystem;
