//! Emark Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Entity Markup
//! parser and renderers. It includes:
//!
//! - **Model**: The parsed tree ([`model::Entity`], [`model::Morphism`],
//!   [`model::Document`])
//! - **Colors**: CSS color handling for themes ([`color::Color`])

pub mod color;
pub mod model;
