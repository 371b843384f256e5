//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for
//! testing purposes. These factories create valid Serenity objects by deserializing
//! JSON, simulating what Discord's API would return.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `guild::create_populated_guild` - Create a Guild with members, presences, voice
//!   states and channels
//! - `member` - Gateway JSON for members, presences, voice states and channels

pub mod guild;
pub mod member;

pub use guild::{create_populated_guild, create_test_guild, GuildPopulation};
