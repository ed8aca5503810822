//! # AI4Disco Library
//!
//! Demo dashboard for AI-powered biosynthetic gene cluster (BGC) discovery.
//! Renders a fixed set of prioritized clusters as a table, a novelty vs
//! drug-likeness scatter chart and a standalone HTML page.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod render;
pub mod ui;
