use crate::error::{Error, Result};
use markdown::Options;

/// Renders post bodies to HTML.
pub struct MarkdownCompiler {
    options: Options,
}

impl MarkdownCompiler {
    pub fn new() -> Self {
        let options = Options::gfm();
        Self { options }
    }

    pub fn to_html(&self, body: &str) -> Result<String> {
        markdown::to_html_with_options(body, &self.options)
            .map_err(|e| Error::Markdown(e.to_string()))
    }
}

impl Default for MarkdownCompiler {
    fn default() -> Self {
        Self::new()
    }
}
