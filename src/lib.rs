pub mod domain;
pub mod infrastructure;

pub use domain::feed::{FeedError, FeedPage, FeedRanker, FeedRankerApi};
pub use domain::post::{Post, RawPost};
pub use infrastructure::config::FeedConfig;
pub use infrastructure::sources::{AuthorDirectory, PostSource};
