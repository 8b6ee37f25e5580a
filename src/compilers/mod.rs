mod handlebars;
mod markdown;

pub use self::handlebars::HandlebarsCompiler;
pub use self::markdown::MarkdownCompiler;
