use crate::blog::Blog;
use crate::compilers::MarkdownCompiler;
use crate::config::Config;
use crate::error::{Error, Result};
use std::io::Write;

/// Prints one published post. A missing or unpublished post is
/// `Error::NotFound`.
pub fn show<W: Write>(config: &Config, slug: &str, html: bool, out: &mut W) -> Result<()> {
    let blog = Blog::new(config.store());
    let post = blog
        .get_published_post(slug)?
        .ok_or_else(|| Error::NotFound(slug.to_string()))?;

    let body = if html {
        MarkdownCompiler::new().to_html(post.body.as_str())?
    } else {
        post.body
    };

    let meta = &post.meta;
    writeln!(out, "title: {}", meta.title).map_err(Error::Io)?;
    writeln!(out, "date: {}", meta.date).map_err(Error::Io)?;
    writeln!(out, "description: {}", meta.description).map_err(Error::Io)?;
    if !meta.tags.is_empty() {
        writeln!(out, "tags: {}", meta.tags.join(", ")).map_err(Error::Io)?;
    }
    if let Some(cover_image) = &meta.cover_image {
        writeln!(out, "cover image: {}", cover_image).map_err(Error::Io)?;
    }
    writeln!(out).map_err(Error::Io)?;
    write!(out, "{}", body).map_err(Error::Io)
}
