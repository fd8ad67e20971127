pub mod feed;
pub mod language;
pub mod post;
