pub mod blog;
pub mod cmd;
pub mod compilers;
pub mod config;
pub mod error;
pub mod front_matter;
pub mod post;
pub mod store;

pub use crate::blog::Blog;
pub use crate::error::{Error, Result};
pub use crate::post::{Post, PostMeta};
pub use crate::store::{ContentStore, FsStore, MemoryStore};
