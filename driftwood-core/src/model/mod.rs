/*
    model - Data models for the board

    Defines:
    - Typed ids and small enums (types.rs)
    - User records (user.rs)
    - Posts with embedded votes and comments, plus the wire codec (post.rs)
*/

mod post;
mod types;
mod user;

pub use post::{upvote_percentage, Comment, NewPost, Post, PostAuthor, Vote};
pub use types::{CommentId, PostId, PostKind, UserId, VoteChoice};
pub use user::User;
