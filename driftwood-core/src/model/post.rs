/*
    post.rs - Post aggregate: votes, comments and the wire codec

    A post owns its votes and comments; they are created and removed only
    through the content store and disappear with the post.

    Wire contract: the internal `content` field is exposed under the JSON
    key "text" for text posts and "url" for link posts. The mapping is an
    explicit encode/decode step through a private wire struct; the rest of
    the field names (`type`, `created`, `upvotePercentage`, ...) match the
    board's frontend contract.
*/

use super::types::{CommentId, PostId, PostKind, UserId, VoteChoice};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Author snapshot embedded in posts and comments at creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    #[serde(rename = "username")]
    pub name: String,
    pub id: UserId,
}

/// A single user's vote on a post. At most one entry per user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub user: UserId,
    /// +1 for an upvote, -1 for a downvote
    pub vote: i8,
}

/// Comment attached to a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub body: String,
    pub created: DateTime<Utc>,
    pub author: PostAuthor,
}

impl Comment {
    pub fn new(author: PostAuthor, body: String) -> Self {
        Comment {
            id: CommentId::generate(),
            body,
            created: Utc::now(),
            author,
        }
    }
}

/// Raw post submission, before the store assigns id, author and counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub kind: PostKind,
    pub category: String,
    pub title: String,
    pub content: String,
}

/// A stored post with its embedded votes and comments
#[derive(Debug, Clone)]
pub struct Post {
    pub kind: PostKind,
    pub category: String,
    pub title: String,
    pub content: String,
    pub id: PostId,
    pub author: PostAuthor,
    pub score: i64,
    pub views: u64,
    pub created: DateTime<Utc>,
    pub upvote_percentage: u8,
    pub votes: Vec<Vote>,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Build a freshly submitted post: score 1, a single self-upvote from
    /// the author, no comments.
    pub fn new(raw: NewPost, author: PostAuthor) -> Self {
        let author_vote = Vote {
            user: author.id.clone(),
            vote: VoteChoice::Up.value(),
        };
        Post {
            kind: raw.kind,
            category: raw.category,
            title: raw.title,
            content: raw.content,
            id: PostId::generate(),
            author,
            score: 1,
            views: 1,
            created: Utc::now(),
            upvote_percentage: 100,
            votes: vec![author_vote],
            comments: Vec::new(),
        }
    }
}

/// Share of current voters who voted up, floored to an integer percentage.
/// 0 when nobody has voted.
pub fn upvote_percentage(votes: &[Vote]) -> u8 {
    if votes.is_empty() {
        return 0;
    }
    let upvotes = votes.iter().filter(|v| v.vote > 0).count();
    (upvotes * 100 / votes.len()) as u8
}

// ---------------------------------------------------------------------------
// Wire codec
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
struct NewPostWire {
    #[serde(rename = "type")]
    kind: PostKind,
    #[serde(default)]
    category: String,
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl Serialize for NewPost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (text, url) = split_content(self.kind, &self.content);
        NewPostWire {
            kind: self.kind,
            category: self.category.clone(),
            title: self.title.clone(),
            text,
            url,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NewPost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = NewPostWire::deserialize(deserializer)?;
        Ok(NewPost {
            kind: wire.kind,
            category: wire.category,
            title: wire.title,
            content: pick_content(wire.kind, wire.text, wire.url),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct PostWire {
    #[serde(rename = "type")]
    kind: PostKind,
    category: String,
    title: String,
    id: PostId,
    author: PostAuthor,
    score: i64,
    views: u64,
    created: DateTime<Utc>,
    #[serde(rename = "upvotePercentage")]
    upvote_percentage: u8,
    votes: Vec<Vote>,
    comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl Serialize for Post {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (text, url) = split_content(self.kind, &self.content);
        PostWire {
            kind: self.kind,
            category: self.category.clone(),
            title: self.title.clone(),
            id: self.id.clone(),
            author: self.author.clone(),
            score: self.score,
            views: self.views,
            created: self.created,
            upvote_percentage: self.upvote_percentage,
            votes: self.votes.clone(),
            comments: self.comments.clone(),
            text,
            url,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Post {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = PostWire::deserialize(deserializer)?;
        Ok(Post {
            kind: wire.kind,
            category: wire.category,
            title: wire.title,
            content: pick_content(wire.kind, wire.text, wire.url),
            id: wire.id,
            author: wire.author,
            score: wire.score,
            views: wire.views,
            created: wire.created,
            upvote_percentage: wire.upvote_percentage,
            votes: wire.votes,
            comments: wire.comments,
        })
    }
}

fn split_content(kind: PostKind, content: &str) -> (Option<String>, Option<String>) {
    match kind {
        PostKind::Text => (Some(content.to_string()), None),
        PostKind::Link => (None, Some(content.to_string())),
    }
}

fn pick_content(kind: PostKind, text: Option<String>, url: Option<String>) -> String {
    match kind {
        PostKind::Text => text.unwrap_or_default(),
        PostKind::Link => url.unwrap_or_default(),
    }
}
