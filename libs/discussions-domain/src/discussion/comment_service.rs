//! Comment service - Business logic orchestration for replies
//!
//! Every operation except listing checks topic existence FIRST, before the
//! comment lookup that alone could answer the question. That ordering is a
//! deliberate contract: a missing topic always surfaces as
//! [`DiscussionError::TopicNotFound`], never as an absent comment.

use crate::discussion::entity::{Comment, CommentDraft, UpdateComment};
use crate::discussion::error::{DiscussionError, Result};
use crate::discussion::ids::{CommentId, TopicId};
use crate::discussion::ports::{CommentRepository, TopicRepository};

/// Service for comment operations within a topic
///
/// Owns the comment aggregate's write path and consults the topic repository
/// read-only to check referential state.
pub struct CommentService<T, C> {
    topics: T,
    comments: C,
}

impl<T, C> CommentService<T, C>
where
    T: TopicRepository,
    C: CommentRepository,
{
    /// Create a new CommentService with the given repositories
    pub fn new(topics: T, comments: C) -> Self {
        Self { topics, comments }
    }

    /// List the comments of a topic in insertion order
    ///
    /// No topic existence check: an unknown topic simply has no comments.
    pub async fn list_by_topic(
        &self,
        topic_id: &TopicId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Comment>> {
        self.comments.find_by_topic(topic_id, skip, limit).await
    }

    /// Get a comment by id within a topic
    ///
    /// Fails with [`DiscussionError::TopicNotFound`] if the topic is missing;
    /// otherwise absence of the comment is `None`, not an error.
    pub async fn get(&self, topic_id: &TopicId, comment_id: &CommentId) -> Result<Option<Comment>> {
        self.ensure_topic_exists(topic_id).await?;

        self.comments.get(topic_id, comment_id).await
    }

    /// Create a new comment under a topic
    ///
    /// Fails with [`DiscussionError::TopicNotFound`] if the topic is missing.
    /// If the draft names a reply target, that comment must already exist
    /// within the same topic, otherwise the creation fails with
    /// [`DiscussionError::CommentNotFoundToBeReplied`] carrying the target id.
    ///
    /// On success the topic reference is stamped onto the comment, a fresh
    /// identifier and creation timestamp are assigned, and the persisted
    /// comment is re-read and returned.
    pub async fn create(&self, topic_id: &TopicId, draft: CommentDraft) -> Result<Comment> {
        self.ensure_topic_exists(topic_id).await?;

        if let Some(reply_id) = &draft.reply_comment {
            if self.comments.get(topic_id, reply_id).await?.is_none() {
                return Err(DiscussionError::CommentNotFoundToBeReplied(*reply_id));
            }
        }

        let comment = Comment::new(*topic_id, draft);
        let comment_id = self.comments.insert(&comment).await?;

        self.comments
            .get(topic_id, &comment_id)
            .await?
            .ok_or_else(|| {
                DiscussionError::store_failure(format!(
                    "comment {} vanished after insert",
                    comment_id
                ))
            })
    }

    /// Update a comment with the `Some` fields of a partial update
    ///
    /// Fails with [`DiscussionError::TopicNotFound`] if the topic is missing.
    /// An all-`None` update is a no-op returning the current state; a real
    /// write stamps the `updated` timestamp. Returns `None` if the comment
    /// does not exist in that topic.
    pub async fn update(
        &self,
        topic_id: &TopicId,
        comment_id: &CommentId,
        fields: UpdateComment,
    ) -> Result<Option<Comment>> {
        self.ensure_topic_exists(topic_id).await?;

        if fields.is_empty() {
            return self.comments.get(topic_id, comment_id).await;
        }

        self.comments
            .update(topic_id, comment_id, &fields.stamped())
            .await?;
        self.comments.get(topic_id, comment_id).await
    }

    /// Delete a comment within a topic
    ///
    /// Fails with [`DiscussionError::TopicNotFound`] if the topic is missing.
    /// Returns whether a document was actually removed. Comments can be
    /// deleted freely; nothing downstream depends on them.
    pub async fn delete(&self, topic_id: &TopicId, comment_id: &CommentId) -> Result<bool> {
        self.ensure_topic_exists(topic_id).await?;

        let deleted = self.comments.delete(topic_id, comment_id).await?;
        Ok(deleted > 0)
    }

    async fn ensure_topic_exists(&self, topic_id: &TopicId) -> Result<()> {
        if self.topics.get(topic_id).await?.is_none() {
            return Err(DiscussionError::TopicNotFound(*topic_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discussion::entity::{Topic, TopicDraft};
    use crate::discussion::test_support::{InMemoryComments, InMemoryTopics};

    fn service() -> (
        CommentService<InMemoryTopics, InMemoryComments>,
        InMemoryTopics,
        InMemoryComments,
    ) {
        let topics = InMemoryTopics::default();
        let comments = InMemoryComments::default();
        let service = CommentService::new(topics.clone(), comments.clone());
        (service, topics, comments)
    }

    fn seeded_topic(topics: &InMemoryTopics) -> TopicId {
        let topic = Topic::new(TopicDraft {
            title: "Hey!".to_string(),
            content: "Can you help me please?".to_string(),
            username: "John Doe".to_string(),
        });
        let id = *topic.id();
        topics.seed(topic);
        id
    }

    fn draft(content: &str) -> CommentDraft {
        CommentDraft {
            content: content.to_string(),
            username: "Nephew Bob".to_string(),
            reply_comment: None,
        }
    }

    #[tokio::test]
    async fn test_create_stamps_topic_and_round_trips() {
        let (service, topics, _) = service();
        let topic_id = seeded_topic(&topics);

        let created = service
            .create(&topic_id, draft("Sure! I can help you!"))
            .await
            .unwrap();

        assert_eq!(created.topic_id(), &topic_id);
        let fetched = service.get(&topic_id, created.id()).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_in_missing_topic_fails() {
        let (service, _, _) = service();
        let missing = TopicId::new();

        let err = service.create(&missing, draft("hello")).await.unwrap_err();

        assert!(matches!(err, DiscussionError::TopicNotFound(id) if id == missing));
    }

    #[tokio::test]
    async fn test_create_reply_to_existing_comment() {
        let (service, topics, _) = service();
        let topic_id = seeded_topic(&topics);
        let parent = service.create(&topic_id, draft("parent")).await.unwrap();

        let reply = service
            .create(
                &topic_id,
                CommentDraft {
                    content: "child".to_string(),
                    username: "B".to_string(),
                    reply_comment: Some(*parent.id()),
                },
            )
            .await
            .unwrap();

        assert_eq!(reply.reply_comment(), Some(parent.id()));
    }

    #[tokio::test]
    async fn test_create_reply_to_missing_comment_fails() {
        let (service, topics, _) = service();
        let topic_id = seeded_topic(&topics);
        let ghost = CommentId::new();

        let err = service
            .create(
                &topic_id,
                CommentDraft {
                    content: "child".to_string(),
                    username: "B".to_string(),
                    reply_comment: Some(ghost),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DiscussionError::CommentNotFoundToBeReplied(id) if id == ghost));
    }

    #[tokio::test]
    async fn test_create_reply_across_topics_fails() {
        // The reply target must live in the SAME topic
        let (service, topics, _) = service();
        let topic_a = seeded_topic(&topics);
        let topic_b = seeded_topic(&topics);
        let parent = service.create(&topic_a, draft("parent")).await.unwrap();

        let err = service
            .create(
                &topic_b,
                CommentDraft {
                    content: "child".to_string(),
                    username: "B".to_string(),
                    reply_comment: Some(*parent.id()),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DiscussionError::CommentNotFoundToBeReplied(_)));
    }

    #[tokio::test]
    async fn test_get_checks_topic_before_comment() {
        // Topic existence is checked first, even though the comment lookup
        // alone could answer the question
        let (service, _, comments) = service();
        let ghost_topic = TopicId::new();
        let comment = Comment::new(ghost_topic, draft("orphan"));
        let comment_id = *comment.id();
        comments.seed(comment);

        let err = service.get(&ghost_topic, &comment_id).await.unwrap_err();

        assert!(matches!(err, DiscussionError::TopicNotFound(_)));
    }

    #[tokio::test]
    async fn test_get_missing_comment_in_existing_topic_is_absence() {
        let (service, topics, _) = service();
        let topic_id = seeded_topic(&topics);

        let result = service.get(&topic_id, &CommentId::new()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_by_topic_scopes_and_paginates() {
        let (service, topics, _) = service();
        let topic_a = seeded_topic(&topics);
        let topic_b = seeded_topic(&topics);
        for i in 0..3 {
            service
                .create(&topic_a, draft(&format!("a{}", i)))
                .await
                .unwrap();
        }
        service.create(&topic_b, draft("b0")).await.unwrap();

        let page = service.list_by_topic(&topic_a, 1, 10).await.unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page[0].content(), "a1");
    }

    #[tokio::test]
    async fn test_update_applies_partial_fields() {
        let (service, topics, _) = service();
        let topic_id = seeded_topic(&topics);
        let comment = service.create(&topic_id, draft("draft")).await.unwrap();

        let updated = service
            .update(
                &topic_id,
                comment.id(),
                UpdateComment {
                    content: Some("edited".to_string()),
                    updated: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.content(), "edited");
        assert_eq!(updated.username(), "Nephew Bob");
        assert!(updated.updated().is_some());
    }

    #[tokio::test]
    async fn test_empty_update_is_a_no_op() {
        let (service, topics, comments) = service();
        let topic_id = seeded_topic(&topics);
        let comment = service.create(&topic_id, draft("draft")).await.unwrap();
        let writes_after_create = comments.writes();

        let result = service
            .update(&topic_id, comment.id(), UpdateComment::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result, comment);
        assert!(result.updated().is_none());
        assert_eq!(comments.writes(), writes_after_create);
    }

    #[tokio::test]
    async fn test_update_in_missing_topic_fails() {
        let (service, _, _) = service();

        let err = service
            .update(
                &TopicId::new(),
                &CommentId::new(),
                UpdateComment {
                    content: Some("edited".to_string()),
                    updated: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DiscussionError::TopicNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let (service, topics, _) = service();
        let topic_id = seeded_topic(&topics);
        let comment = service.create(&topic_id, draft("bye")).await.unwrap();

        assert!(service.delete(&topic_id, comment.id()).await.unwrap());
        assert!(!service.delete(&topic_id, comment.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_in_missing_topic_fails() {
        let (service, _, _) = service();

        let err = service
            .delete(&TopicId::new(), &CommentId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, DiscussionError::TopicNotFound(_)));
    }
}
