/*
    driftwood-core - In-memory content store for the driftwood board

    The authoritative state layer for the link/discussion board.
    Handles:
    - Data models (users, posts, votes, comments)
    - Credential storage and password verification
    - Vote toggling and score/percentage aggregation
    - Comment lifecycle

    Everything lives in process memory; a restart loses all state.
*/

pub mod model;
pub mod store;

// Re-export commonly used types
pub use model::{CommentId, PostAuthor, PostId, PostKind, UserId, VoteChoice};
pub use store::{Store, StoreError, StoreResult};
