//! Application layer for strands
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PresenterParams;
pub use ports::{
    clock::{Clock, SystemClock},
    knowledge_base::{KnowledgeBaseError, KnowledgeBaseStore},
    notification::{NoNotification, NotificationSink},
    rendering::{
        DisplayStyle, Indicator, RenderError, RenderResult, Renderer, StreamKind, ToolSpinner,
    },
    welcome_store::{WelcomeStore, WelcomeStoreError},
};
pub use use_cases::manage_welcome::{ManageWelcomeUseCase, WelcomeError, WelcomeOutcome};
pub use use_cases::present_callbacks::{CallbackPresenter, PresenterSnapshot};
pub use use_cases::store_conversation::StoreConversationUseCase;
pub use use_cases::store_in_kb::{
    StoreError, StoreInKnowledgeBaseUseCase, StoreInput, StoreReceipt,
};
