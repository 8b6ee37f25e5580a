use crate::error::{Error, Result};
use crate::front_matter::FrontMatterParser;
use crate::post::{Post, PostMeta};
use crate::store::ContentStore;

/// The published view of a content store.
///
/// Every call reads the store again; nothing is cached between calls.
pub struct Blog<S> {
    store: S,
    parser: FrontMatterParser,
}

impl<S: ContentStore> Blog<S> {
    pub fn new(store: S) -> Self {
        let parser = FrontMatterParser::new();
        Self { store, parser }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Metadata of every published post, newest first.
    ///
    /// Dates are compared as plain strings. Posts with equal dates keep the
    /// store's enumeration order. Any post that fails to parse fails the
    /// whole listing.
    pub fn list_published_posts(&self) -> Result<Vec<PostMeta>> {
        let slugs = self.store.list()?;
        let total = slugs.len();
        let mut posts = Vec::with_capacity(total);

        for slug in slugs {
            match self.load(&slug)? {
                Some(post) if post.meta.published => posts.push(post.into_meta()),
                Some(_) => log::debug!("{} is not published", slug),
                None => log::warn!("{} disappeared while listing", slug),
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        log::debug!("indexed {} posts ({} published)", total, posts.len());

        Ok(posts)
    }

    /// The published post named `slug`.
    ///
    /// `None` when no such post exists or it is not published; callers
    /// cannot tell the two apart.
    pub fn get_published_post(&self, slug: &str) -> Result<Option<Post>> {
        let post = self.load(slug)?.filter(|post| post.meta.published);

        if post.is_none() {
            log::debug!("{} not found", slug);
        }

        Ok(post)
    }

    fn load(&self, slug: &str) -> Result<Option<Post>> {
        let content = match self.store.read(slug)? {
            Some(content) => content,
            None => return Ok(None),
        };

        self.parser
            .parse(slug, content.as_str())
            .map(Some)
            .map_err(|e| Error::InvalidPost(slug.to_string(), Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn post(date: &str, published: bool) -> String {
        format!(
            "---\ntitle: Post from {}\ndate: {}\npublished: {}\n---\nBody of {}\n",
            date, date, published, date
        )
    }

    fn example_blog() -> Blog<MemoryStore> {
        let mut store = MemoryStore::new();
        store.insert("a", post("2024-01-01", true));
        store.insert("b", post("2024-06-01", true));
        store.insert("c", post("2024-03-01", false));
        Blog::new(store)
    }

    fn slugs(posts: &[PostMeta]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn lists_published_newest_first() {
        let blog = example_blog();
        let posts = blog.list_published_posts().unwrap();

        assert_eq!(slugs(&posts), vec!["b", "a"]);
        assert_eq!(posts[0].title, "Post from 2024-06-01");
    }

    #[test]
    fn empty_store() {
        let blog = Blog::new(MemoryStore::new());
        assert!(blog.list_published_posts().unwrap().is_empty());
    }

    #[test]
    fn missing_flag_is_unpublished() {
        let mut store = MemoryStore::new();
        store.insert("draft", "---\ntitle: Draft\ndate: 2024-01-01\n---\nBody");
        store.insert("plain", "no front matter at all");
        let blog = Blog::new(store);

        assert!(blog.list_published_posts().unwrap().is_empty());
        assert_eq!(blog.get_published_post("draft").unwrap(), None);
        assert_eq!(blog.get_published_post("plain").unwrap(), None);
    }

    #[test]
    fn sorts_dates_as_strings() {
        let mut store = MemoryStore::new();
        store.insert("iso", post("2024-02-01", true));
        store.insert("us", post("9/1/2023", true));
        store.insert("undated", "---\npublished: true\n---\n");
        let blog = Blog::new(store);

        let posts = blog.list_published_posts().unwrap();
        assert_eq!(slugs(&posts), vec!["us", "iso", "undated"]);
        for pair in posts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn equal_dates_keep_store_order() {
        let mut store = MemoryStore::new();
        store.insert("x", post("2024-01-01", true));
        store.insert("y", post("2024-01-01", true));
        store.insert("z", post("2024-01-01", true));
        let blog = Blog::new(store);

        let posts = blog.list_published_posts().unwrap();
        assert_eq!(slugs(&posts), vec!["x", "y", "z"]);
    }

    #[test]
    fn resolves_published_post() {
        let blog = example_blog();
        let post = blog.get_published_post("a").unwrap().unwrap();

        assert_eq!(post.meta.slug, "a");
        assert_eq!(post.meta.date, "2024-01-01");
        assert!(post.meta.published);
        assert_eq!(post.body, "Body of 2024-01-01\n");
    }

    #[test]
    fn unpublished_and_missing_are_not_found() {
        let blog = example_blog();

        assert_eq!(blog.get_published_post("c").unwrap(), None);
        assert_eq!(blog.get_published_post("missing").unwrap(), None);
    }

    #[test]
    fn calls_are_idempotent() {
        let blog = example_blog();

        assert_eq!(
            blog.list_published_posts().unwrap(),
            blog.list_published_posts().unwrap()
        );
        assert_eq!(
            blog.get_published_post("b").unwrap(),
            blog.get_published_post("b").unwrap()
        );
    }

    #[test]
    fn malformed_post_fails_listing() {
        let mut store = MemoryStore::new();
        store.insert("good", post("2024-01-01", true));
        store.insert("bad", "---\ntags: [oops\n---\nBody");
        let blog = Blog::new(store);

        match blog.list_published_posts() {
            Err(Error::InvalidPost(slug, _)) => assert_eq!(slug, "bad"),
            other => panic!("expected InvalidPost, got {:?}", other),
        }
        assert!(blog.get_published_post("good").unwrap().is_some());
        assert!(matches!(
            blog.get_published_post("bad"),
            Err(Error::InvalidPost(_, _))
        ));
    }
}
