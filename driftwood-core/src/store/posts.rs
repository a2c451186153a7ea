/*
    posts.rs - Content store

    Owns posts keyed by id, with their embedded votes and comments.

    Locking: one RwLock over the post map. Every mutation holds the write
    lock across its whole read-modify-write sequence, so score and vote-set
    updates cannot lose concurrent writes. Reads return cloned snapshots.

    Vote invariant: at most one vote per user per post; a new choice
    replaces the old entry, `VoteChoice::None` clears it. The score is
    maintained incrementally from the (old, new) transition, never
    recomputed by scanning; only the upvote percentage rescans the set.
*/

use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::model::{upvote_percentage, Comment, CommentId, NewPost, Post, PostAuthor, PostId, UserId, Vote, VoteChoice};
use crate::store::errors::{StoreError, StoreResult};

pub struct PostStore {
    posts: RwLock<HashMap<PostId, Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        PostStore {
            posts: RwLock::new(HashMap::new()),
        }
    }

    /// Store a freshly submitted post and return it. The author starts
    /// with an automatic self-upvote (score 1, percentage 100).
    pub async fn create(&self, raw: NewPost, author: PostAuthor) -> Post {
        let post = Post::new(raw, author);

        let mut posts = self.posts.write().await;
        posts.insert(post.id.clone(), post.clone());

        debug!(post = %post.id, author = %post.author.id, "created post");
        post
    }

    /// Remove a post entirely, comments and votes included. Only the
    /// post's author may delete it.
    pub async fn delete(&self, id: &PostId, requester: &UserId) -> StoreResult<()> {
        let mut posts = self.posts.write().await;

        let post = posts
            .get(id)
            .ok_or_else(|| StoreError::NotFound(format!("post {}", id)))?;

        if post.author.id != *requester {
            return Err(StoreError::PermissionDenied(format!(
                "user {} is not the author of post {}",
                requester, id
            )));
        }

        posts.remove(id);
        debug!(post = %id, "deleted post");
        Ok(())
    }

    /// Snapshot of all posts. Callers may filter and sort freely without
    /// affecting store state.
    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: &PostId) -> StoreResult<Post> {
        self.posts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("post {}", id)))
    }

    /// Apply a vote toggle and return the updated post.
    ///
    /// Transitions and score deltas, by (old, new):
    ///   none -> up: +1        none -> down: -1
    ///   up   -> down: -2      down -> up:   +2
    ///   up   -> none: -1      down -> none: +1
    ///   up   -> up, down -> down: no-op, the post is left untouched
    pub async fn vote(&self, id: &PostId, user: &UserId, choice: VoteChoice) -> StoreResult<Post> {
        let mut posts = self.posts.write().await;

        let post = posts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("post {}", id)))?;

        let existing = post.votes.iter().position(|v| v.user == *user);
        let old_value = existing.map(|i| post.votes[i].vote);
        let new_value = choice.value();

        // idempotent re-vote: same direction again changes nothing
        if old_value == Some(new_value) {
            return Ok(post.clone());
        }

        if let Some(i) = existing {
            post.votes.remove(i);
        }
        if choice != VoteChoice::None {
            post.votes.push(Vote {
                user: user.clone(),
                vote: new_value,
            });
        }

        post.score += new_value as i64 - old_value.unwrap_or(0) as i64;
        post.upvote_percentage = upvote_percentage(&post.votes);

        debug!(post = %id, user = %user, score = post.score, "applied vote");
        Ok(post.clone())
    }

    /// Append a comment and return the updated post.
    pub async fn add_comment(
        &self,
        id: &PostId,
        author: PostAuthor,
        body: String,
    ) -> StoreResult<Post> {
        let mut posts = self.posts.write().await;

        let post = posts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("post {}", id)))?;

        post.comments.push(Comment::new(author, body));
        Ok(post.clone())
    }

    /// Remove a comment and return the updated post. Only the comment's
    /// own author may delete it; the post's author holds no special power
    /// over other people's comments.
    pub async fn delete_comment(
        &self,
        id: &PostId,
        requester: &UserId,
        comment_id: &CommentId,
    ) -> StoreResult<Post> {
        let mut posts = self.posts.write().await;

        let post = posts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("post {}", id)))?;

        let index = post
            .comments
            .iter()
            .position(|c| c.id == *comment_id)
            .ok_or_else(|| StoreError::NotFound(format!("comment {}", comment_id)))?;

        if post.comments[index].author.id != *requester {
            return Err(StoreError::PermissionDenied(format!(
                "user {} is not the author of comment {}",
                requester, comment_id
            )));
        }

        post.comments.remove(index);
        Ok(post.clone())
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
