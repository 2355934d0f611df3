//! PMM Assistant - Guided Positioning & Messaging Program
//!
//! This crate walks a user through an eleven-step positioning and messaging
//! program. Each inbound chat message is classified by a text-generation
//! service and answered either with a clarifying follow-up or with a
//! step-aware reply; form answers, plans and market research are served
//! through the same generation boundary.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
