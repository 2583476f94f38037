//! Threads façade
//!
//! Thread lifecycle and message operations over the `/threads` endpoint

use crate::models::common::{ApiResponse, DeletionStatus, ListResponse};
use crate::models::threads::{
    MessageObject, MessageRequest, Metadata, ThreadModifyRequest, ThreadObject, ThreadRequest,
};
use crate::services::dispatch::ApiDispatcher;
use crate::utils::error::ClientResult;
use async_trait::async_trait;

/// Endpoint path segment
const ENDPOINT: &str = "threads";

/// Thread and message operations
#[async_trait]
pub trait ThreadsApi {
    /// Create a thread
    async fn create(&self, request: ThreadRequest) -> ClientResult<ApiResponse<ThreadObject>>;

    /// Retrieve a thread by id
    async fn retrieve(&self, thread_id: &str) -> ClientResult<ApiResponse<ThreadObject>>;

    /// Replace a thread's metadata, its only mutable attribute
    async fn modify(
        &self,
        thread_id: &str,
        metadata: Metadata,
    ) -> ClientResult<ApiResponse<ThreadObject>>;

    /// Delete a thread by id
    async fn delete(&self, thread_id: &str) -> ClientResult<ApiResponse<DeletionStatus>>;

    /// Add a message to a thread
    async fn create_message(
        &self,
        thread_id: &str,
        request: MessageRequest,
    ) -> ClientResult<ApiResponse<MessageObject>>;

    /// Retrieve a single message from a thread
    async fn retrieve_message(
        &self,
        thread_id: &str,
        message_id: &str,
    ) -> ClientResult<ApiResponse<MessageObject>>;

    /// List the messages of a thread
    async fn list_messages(
        &self,
        thread_id: &str,
    ) -> ClientResult<ApiResponse<ListResponse<MessageObject>>>;
}

/// Threads client
#[derive(Debug, Clone)]
pub struct ThreadsClient {
    dispatcher: ApiDispatcher,
}

impl ThreadsClient {
    /// Create a threads client over the shared dispatcher
    pub fn new(dispatcher: ApiDispatcher) -> Self {
        Self { dispatcher }
    }

    fn thread_path(thread_id: &str) -> String {
        format!("{}/{}", ENDPOINT, thread_id)
    }

    fn messages_path(thread_id: &str) -> String {
        format!("{}/{}/messages", ENDPOINT, thread_id)
    }
}

#[async_trait]
impl ThreadsApi for ThreadsClient {
    async fn create(&self, request: ThreadRequest) -> ClientResult<ApiResponse<ThreadObject>> {
        self.dispatcher.post_json(ENDPOINT, &request).await
    }

    async fn retrieve(&self, thread_id: &str) -> ClientResult<ApiResponse<ThreadObject>> {
        self.dispatcher.get(&Self::thread_path(thread_id)).await
    }

    async fn modify(
        &self,
        thread_id: &str,
        metadata: Metadata,
    ) -> ClientResult<ApiResponse<ThreadObject>> {
        // The provider updates threads via POST on the resource path
        let request = ThreadModifyRequest { metadata };
        self.dispatcher
            .post_json(&Self::thread_path(thread_id), &request)
            .await
    }

    async fn delete(&self, thread_id: &str) -> ClientResult<ApiResponse<DeletionStatus>> {
        self.dispatcher.delete(&Self::thread_path(thread_id)).await
    }

    async fn create_message(
        &self,
        thread_id: &str,
        request: MessageRequest,
    ) -> ClientResult<ApiResponse<MessageObject>> {
        self.dispatcher
            .post_json(&Self::messages_path(thread_id), &request)
            .await
    }

    async fn retrieve_message(
        &self,
        thread_id: &str,
        message_id: &str,
    ) -> ClientResult<ApiResponse<MessageObject>> {
        let path = format!("{}/{}", Self::messages_path(thread_id), message_id);
        self.dispatcher.get(&path).await
    }

    async fn list_messages(
        &self,
        thread_id: &str,
    ) -> ClientResult<ApiResponse<ListResponse<MessageObject>>> {
        self.dispatcher.get(&Self::messages_path(thread_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_construction() {
        assert_eq!(ThreadsClient::thread_path("thread_1"), "threads/thread_1");
        assert_eq!(
            ThreadsClient::messages_path("thread_1"),
            "threads/thread_1/messages"
        );
    }
}
