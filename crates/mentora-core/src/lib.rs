//! # mentora-core
//!
//! Core types, semester model, and error types for Mentora.
//!
//! This crate provides the foundational types shared across all Mentora crates:
//! - Entity structs for mentors, mentees, and notifications
//! - The validated `Semester` newtype (1 through 8)
//! - Assignment strategy and notification role enums
//! - ID prefix constants
//! - Cross-cutting error types
//! - Outcome and report types returned by the assignment engine

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod semester;

pub use semester::Semester;
