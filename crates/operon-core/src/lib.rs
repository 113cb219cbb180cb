//! Operon Core Types
//!
//! This crate provides the foundational types for the Operon genetic
//! circuit design model. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Basic geometric types written by a rendering stage ([`geometry`] module)
//! - **Options**: Open-ended renderer-hint mappings ([`options`] module)
//! - **Semantic**: The design model itself ([`semantic`] module)

pub mod geometry;
pub mod identifier;
pub mod options;
pub mod semantic;
