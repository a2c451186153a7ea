/*
    types.rs - Common types for the board models

    Defines:
    - IDs for users, posts and comments
    - Post kind (text vs link)
    - Vote choice
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: String) -> Self {
        UserId(id)
    }

    pub fn generate() -> Self {
        UserId(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a post
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub String);

impl PostId {
    pub fn new(id: String) -> Self {
        PostId(id)
    }

    pub fn generate() -> Self {
        PostId(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn new(id: String) -> Self {
        CommentId(id)
    }

    pub fn generate() -> Self {
        CommentId(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a post: a plain text body or an external link.
/// Decides which wire key carries the content (`text` vs `url`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Text,
    Link,
}

impl Default for PostKind {
    fn default() -> Self {
        PostKind::Text
    }
}

/// A voter's choice on a post. `None` clears any prior vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChoice {
    Up,
    Down,
    None,
}

impl VoteChoice {
    /// Contribution of this choice to a post's score.
    pub fn delta(self) -> i64 {
        match self {
            VoteChoice::Up => 1,
            VoteChoice::Down => -1,
            VoteChoice::None => 0,
        }
    }

    /// Wire value of a stored vote (+1 / -1). `None` is never stored.
    pub fn value(self) -> i8 {
        self.delta() as i8
    }
}
