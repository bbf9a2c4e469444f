//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the askdesk GUI:
//! - Header panel (application title, theme toggle)
//! - Question panel (question input, suggestion buttons)
//! - Panel manager (panel orchestration and layout)
//!
//! Panels mutate only what they render (the input buffer, widget focus);
//! every behavioral consequence is returned as an interaction value that the
//! application shell dispatches to a coordinator.

pub mod header;
pub mod panel_manager;
pub mod question_panel;
