//! In-memory repository doubles for service tests
//!
//! The doubles track write counts so tests can assert that empty partial
//! updates never reach the store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::discussion::entity::{Comment, Topic, UpdateComment, UpdateTopic};
use crate::discussion::error::Result;
use crate::discussion::ids::{CommentId, TopicId};
use crate::discussion::ports::{CommentRepository, TopicRepository};

#[derive(Clone, Default)]
pub(crate) struct InMemoryTopics {
    topics: Arc<Mutex<Vec<Topic>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryTopics {
    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub(crate) fn seed(&self, topic: Topic) {
        self.topics.lock().unwrap().push(topic);
    }
}

impl TopicRepository for InMemoryTopics {
    fn find(
        &self,
        skip: usize,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Topic>>> + Send {
        let topics = self.topics.clone();

        async move {
            Ok(topics
                .lock()
                .unwrap()
                .iter()
                .skip(skip)
                .take(limit)
                .cloned()
                .collect())
        }
    }

    fn search(
        &self,
        term: &str,
        skip: usize,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Topic>>> + Send {
        let topics = self.topics.clone();
        let term = term.to_lowercase();

        async move {
            let mut scored: Vec<(usize, Topic)> = topics
                .lock()
                .unwrap()
                .iter()
                .filter_map(|topic| {
                    let score = topic.title().to_lowercase().matches(&term).count()
                        + topic.content().to_lowercase().matches(&term).count();
                    (score > 0).then(|| (score, topic.clone()))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));

            Ok(scored
                .into_iter()
                .map(|(_, topic)| topic)
                .skip(skip)
                .take(limit)
                .collect())
        }
    }

    fn get(
        &self,
        topic_id: &TopicId,
    ) -> impl std::future::Future<Output = Result<Option<Topic>>> + Send {
        let topics = self.topics.clone();
        let topic_id = *topic_id;

        async move {
            Ok(topics
                .lock()
                .unwrap()
                .iter()
                .find(|topic| topic.id() == &topic_id)
                .cloned())
        }
    }

    fn insert(&self, topic: &Topic) -> impl std::future::Future<Output = Result<TopicId>> + Send {
        let topics = self.topics.clone();
        let writes = self.writes.clone();
        let topic = topic.clone();

        async move {
            writes.fetch_add(1, Ordering::SeqCst);
            let id = *topic.id();
            topics.lock().unwrap().push(topic);
            Ok(id)
        }
    }

    fn update(
        &self,
        topic_id: &TopicId,
        fields: &UpdateTopic,
    ) -> impl std::future::Future<Output = Result<u64>> + Send {
        let topics = self.topics.clone();
        let writes = self.writes.clone();
        let topic_id = *topic_id;
        let fields = fields.clone();

        async move {
            writes.fetch_add(1, Ordering::SeqCst);
            let mut guard = topics.lock().unwrap();
            match guard.iter_mut().find(|topic| topic.id() == &topic_id) {
                Some(topic) => {
                    topic.apply(&fields);
                    Ok(1)
                }
                None => Ok(0),
            }
        }
    }

    fn delete(&self, topic_id: &TopicId) -> impl std::future::Future<Output = Result<u64>> + Send {
        let topics = self.topics.clone();
        let writes = self.writes.clone();
        let topic_id = *topic_id;

        async move {
            writes.fetch_add(1, Ordering::SeqCst);
            let mut guard = topics.lock().unwrap();
            let before = guard.len();
            guard.retain(|topic| topic.id() != &topic_id);
            Ok((before - guard.len()) as u64)
        }
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryComments {
    comments: Arc<Mutex<Vec<Comment>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryComments {
    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub(crate) fn seed(&self, comment: Comment) {
        self.comments.lock().unwrap().push(comment);
    }
}

impl CommentRepository for InMemoryComments {
    fn find_by_topic(
        &self,
        topic_id: &TopicId,
        skip: usize,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Comment>>> + Send {
        let comments = self.comments.clone();
        let topic_id = *topic_id;

        async move {
            Ok(comments
                .lock()
                .unwrap()
                .iter()
                .filter(|comment| comment.topic_id() == &topic_id)
                .skip(skip)
                .take(limit)
                .cloned()
                .collect())
        }
    }

    fn count_by_topic(
        &self,
        topic_id: &TopicId,
    ) -> impl std::future::Future<Output = Result<u64>> + Send {
        let comments = self.comments.clone();
        let topic_id = *topic_id;

        async move {
            Ok(comments
                .lock()
                .unwrap()
                .iter()
                .filter(|comment| comment.topic_id() == &topic_id)
                .count() as u64)
        }
    }

    fn get(
        &self,
        topic_id: &TopicId,
        comment_id: &CommentId,
    ) -> impl std::future::Future<Output = Result<Option<Comment>>> + Send {
        let comments = self.comments.clone();
        let topic_id = *topic_id;
        let comment_id = *comment_id;

        async move {
            Ok(comments
                .lock()
                .unwrap()
                .iter()
                .find(|comment| comment.id() == &comment_id && comment.topic_id() == &topic_id)
                .cloned())
        }
    }

    fn insert(
        &self,
        comment: &Comment,
    ) -> impl std::future::Future<Output = Result<CommentId>> + Send {
        let comments = self.comments.clone();
        let writes = self.writes.clone();
        let comment = comment.clone();

        async move {
            writes.fetch_add(1, Ordering::SeqCst);
            let id = *comment.id();
            comments.lock().unwrap().push(comment);
            Ok(id)
        }
    }

    fn update(
        &self,
        topic_id: &TopicId,
        comment_id: &CommentId,
        fields: &UpdateComment,
    ) -> impl std::future::Future<Output = Result<u64>> + Send {
        let comments = self.comments.clone();
        let writes = self.writes.clone();
        let topic_id = *topic_id;
        let comment_id = *comment_id;
        let fields = fields.clone();

        async move {
            writes.fetch_add(1, Ordering::SeqCst);
            let mut guard = comments.lock().unwrap();
            match guard
                .iter_mut()
                .find(|comment| comment.id() == &comment_id && comment.topic_id() == &topic_id)
            {
                Some(comment) => {
                    comment.apply(&fields);
                    Ok(1)
                }
                None => Ok(0),
            }
        }
    }

    fn delete(
        &self,
        topic_id: &TopicId,
        comment_id: &CommentId,
    ) -> impl std::future::Future<Output = Result<u64>> + Send {
        let comments = self.comments.clone();
        let writes = self.writes.clone();
        let topic_id = *topic_id;
        let comment_id = *comment_id;

        async move {
            writes.fetch_add(1, Ordering::SeqCst);
            let mut guard = comments.lock().unwrap();
            let before = guard.len();
            guard.retain(|comment| {
                comment.id() != &comment_id || comment.topic_id() != &topic_id
            });
            Ok((before - guard.len()) as u64)
        }
    }
}
