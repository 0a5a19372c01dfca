//! Port definitions for the application layer.
//!
//! Ports are the seams between use cases and the outside world. The
//! presentation and infrastructure layers implement them.
//!
//! | Port | Direction | Implemented by |
//! |------|-----------|----------------|
//! | [`rendering::Renderer`] | output | terminal adapters (presentation) |
//! | [`clock::Clock`] | input | [`clock::SystemClock`] |
//! | [`notification::NotificationSink`] | output | console notifier (presentation) |
//! | [`knowledge_base::KnowledgeBaseStore`] | output | local JSONL store (infrastructure) |
//! | [`welcome_store::WelcomeStore`] | input/output | `.welcome` file (infrastructure) |

pub mod clock;
pub mod knowledge_base;
pub mod notification;
pub mod rendering;
pub mod welcome_store;
