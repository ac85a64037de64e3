//! Integration tests for Layer 1: Inventory
//!
//! Tests for slots, game data sync, and the simulation state.

mod slots;
mod sync;
