pub mod error;
pub mod model;
pub mod service;

pub use error::FeedError;
pub use model::{Cursor, FeedPage};
pub use service::{FeedRanker, FeedRankerApi};
