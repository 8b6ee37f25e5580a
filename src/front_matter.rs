use crate::error::{Error, Result};
use crate::post::{Post, PostMeta};
use markdown::mdast::{Node, Root, Toml, Yaml};
use markdown::unist::Position;
use markdown::{Constructs, ParseOptions};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter {
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
    cover_image: Option<String>,
    published: Option<bool>,
}

impl FrontMatter {
    fn into_meta(self, slug: &str) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: self.title.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            cover_image: self.cover_image,
            published: self.published.unwrap_or_default(),
        }
    }
}

/// Splits a content file into its metadata and body.
///
/// YAML front matter is fenced with `---`, TOML with `+++`. A file without
/// front matter gets default metadata (and so is never published).
pub struct FrontMatterParser {
    options: ParseOptions,
}

impl FrontMatterParser {
    pub fn new() -> Self {
        let constructs = Constructs {
            frontmatter: true,
            ..Default::default()
        };

        let options = ParseOptions {
            constructs,
            ..Default::default()
        };

        Self { options }
    }

    pub fn parse(&self, slug: &str, content: &str) -> Result<Post> {
        let ast = markdown::to_mdast(content, &self.options)
            .map_err(|e| Error::Markdown(e.to_string()))?;

        let first = match &ast {
            Node::Root(Root { children, .. }) => children.first(),
            _ => None,
        };

        let (front_matter, end) = match first {
            Some(Node::Yaml(Yaml { value, position })) => (parse_yaml(value)?, end_of(position)),
            Some(Node::Toml(Toml { value, position })) => (parse_toml(value)?, end_of(position)),
            _ => (FrontMatter::default(), 0),
        };

        let body = strip_line_ending(content.get(end..).unwrap_or_default());
        log::debug!("parsed {} ({} byte body)", slug, body.len());

        Ok(Post {
            meta: front_matter.into_meta(slug),
            body: body.to_string(),
        })
    }
}

impl Default for FrontMatterParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_yaml(value: &str) -> Result<FrontMatter> {
    if value.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    serde_yaml::from_str(value).map_err(Error::Yaml)
}

// TOML dates become their RFC 3339 text.
fn parse_toml(value: &str) -> Result<FrontMatter> {
    let mut table: toml::Table = toml::from_str(value).map_err(Error::Toml)?;

    if let Some(toml::Value::Datetime(date)) = table.get("date") {
        let date = date.to_string();
        table.insert("date".to_string(), toml::Value::String(date));
    }

    toml::Value::Table(table)
        .try_into::<FrontMatter>()
        .map_err(Error::Toml)
}

fn end_of(position: &Option<Position>) -> usize {
    position.as_ref().map(|p| p.end.offset).unwrap_or_default()
}

fn strip_line_ending(body: &str) -> &str {
    body.strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body)
}
