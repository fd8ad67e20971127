pub mod author_directory;
pub mod cached_author_directory;
pub mod post_source;

pub use author_directory::{AuthorDirectory, AuthorLookupError};
pub use cached_author_directory::{author_directory_from_config, CachedAuthorDirectory};
pub use post_source::{PostBatch, PostSource, SourceError};
