use serde::Serialize;

/// Metadata of one content file, as shown on the blog index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub published: bool,
}

/// A full post: metadata plus the raw Markdown body that follows the front
/// matter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,
    pub body: String,
}

impl Post {
    pub fn into_meta(self) -> PostMeta {
        self.meta
    }
}
