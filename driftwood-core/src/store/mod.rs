/*
    store - The shared in-memory store

    One `Store` instance is the sole shared mutable resource of the
    process. It owns two sub-stores, each behind its own read-write lock:

    - users: credential records, keyed by display name
    - posts: the content map, keyed by post id

    The unified surface forwards each operation to the responsible
    sub-store; there is no behavior of its own beyond delegation.
*/

mod errors;
mod posts;
mod users;

pub use errors::{StoreError, StoreResult};
pub use posts::PostStore;
pub use users::UserStore;

use crate::model::{CommentId, NewPost, Post, PostAuthor, PostId, User, UserId, VoteChoice};

pub struct Store {
    users: UserStore,
    posts: PostStore,
}

impl Store {
    pub fn new() -> Self {
        Store {
            users: UserStore::new(),
            posts: PostStore::new(),
        }
    }

    // --- credential operations ---

    pub async fn register(&self, name: &str, password: &str) -> StoreResult<User> {
        self.users.register(name, password).await
    }

    pub async fn authenticate(&self, name: &str, password: &str) -> StoreResult<User> {
        self.users.authenticate(name, password).await
    }

    // --- content operations ---

    pub async fn create_post(&self, raw: NewPost, author: PostAuthor) -> Post {
        self.posts.create(raw, author).await
    }

    pub async fn delete_post(&self, id: &PostId, requester: &UserId) -> StoreResult<()> {
        self.posts.delete(id, requester).await
    }

    pub async fn posts(&self) -> Vec<Post> {
        self.posts.list().await
    }

    pub async fn post(&self, id: &PostId) -> StoreResult<Post> {
        self.posts.get(id).await
    }

    pub async fn vote(&self, id: &PostId, user: &UserId, choice: VoteChoice) -> StoreResult<Post> {
        self.posts.vote(id, user, choice).await
    }

    pub async fn add_comment(
        &self,
        id: &PostId,
        author: PostAuthor,
        body: String,
    ) -> StoreResult<Post> {
        self.posts.add_comment(id, author, body).await
    }

    pub async fn delete_comment(
        &self,
        id: &PostId,
        requester: &UserId,
        comment_id: &CommentId,
    ) -> StoreResult<Post> {
        self.posts.delete_comment(id, requester, comment_id).await
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
