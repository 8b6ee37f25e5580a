use crate::blog::Blog;
use crate::config::Config;
use crate::error::{Error, Result};
use std::io::Write;

pub fn list<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let blog = Blog::new(config.store());

    for post in blog.list_published_posts()? {
        writeln!(out, "{:<12} {:<32} {}", post.date, post.slug, post.title).map_err(Error::Io)?;
    }

    Ok(())
}
