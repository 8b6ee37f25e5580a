use crate::blog::Blog;
use crate::compilers::{HandlebarsCompiler, MarkdownCompiler};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::post::PostMeta;
use serde::Serialize;
use std::fs;
use std::path::Path;

const INDEX_TEMPLATE: &str = "index";
const POST_TEMPLATE: &str = "post";

#[derive(Serialize)]
struct IndexPage<'a> {
    posts: &'a [PostMeta],
}

#[derive(Serialize)]
struct PostPage<'a> {
    post: &'a PostMeta,
    body: &'a str,
}

/// Renders `index.html` and one `<slug>.html` per published post into the
/// output directory.
pub fn build(config: &Config) -> Result<()> {
    let out_dir = Path::new(config.build.out_dir.as_str());
    fs::create_dir_all(out_dir).map_err(Error::Io)?;

    let mut handlebars = HandlebarsCompiler::new();
    if let Some(pattern) = &config.build.partials_pattern {
        handlebars.add_partials(pattern.as_str())?;
    }
    handlebars.add_template(INDEX_TEMPLATE, config.build.index_template.as_str())?;
    handlebars.add_template(POST_TEMPLATE, config.build.post_template.as_str())?;

    let blog = Blog::new(config.store());
    let posts = blog.list_published_posts()?;
    handlebars.render_to_file(
        INDEX_TEMPLATE,
        &IndexPage { posts: &posts },
        out_dir.join("index.html"),
    )?;

    let markdown = MarkdownCompiler::new();
    for meta in &posts {
        let post = match blog.get_published_post(meta.slug.as_str())? {
            Some(post) => post,
            None => {
                log::warn!("{} vanished during the build", meta.slug);
                continue;
            }
        };

        let body = markdown.to_html(post.body.as_str())?;
        let path = out_dir.join(format!("{}.html", post.meta.slug));
        let page = PostPage {
            post: &post.meta,
            body: body.as_str(),
        };
        handlebars.render_to_file(POST_TEMPLATE, &page, path)?;
    }

    log::info!("Build complete: {} posts", posts.len());

    Ok(())
}
