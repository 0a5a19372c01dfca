//! Capture a user/assistant exchange in the knowledge base.

use super::store_in_kb::{StoreError, StoreInKnowledgeBaseUseCase, StoreInput, StoreReceipt};
use strands_domain::{ChatMessage, ConversationRecord};
use tracing::debug;

/// Use case storing conversations when a knowledge base is configured.
pub struct StoreConversationUseCase<'a> {
    store: &'a StoreInKnowledgeBaseUseCase,
}

impl<'a> StoreConversationUseCase<'a> {
    pub fn new(store: &'a StoreInKnowledgeBaseUseCase) -> Self {
        Self { store }
    }

    /// Store the exchange. Returns `Ok(None)` when no knowledge base is set.
    pub fn execute(
        &self,
        user_input: &str,
        response: Option<&ChatMessage>,
        knowledge_base_id: Option<&str>,
    ) -> Result<Option<StoreReceipt>, StoreError> {
        let Ok(knowledge_base_id) = self.store.resolve_knowledge_base(knowledge_base_id) else {
            debug!("No knowledge base configured, conversation not stored");
            return Ok(None);
        };

        let record = ConversationRecord::compose(user_input, response);
        let input = StoreInput::new(record.content)
            .with_title(record.title)
            .with_knowledge_base(knowledge_base_id.as_str());
        self.store.store(input).map(Some)
    }
}
