use crate::error::{Error, Result};
use glob::glob;
use handlebars::Handlebars;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

pub struct HandlebarsCompiler<'a> {
    registry: Handlebars<'a>,
}

impl<'a> HandlebarsCompiler<'a> {
    pub fn new() -> Self {
        let registry = Handlebars::new();
        Self { registry }
    }

    pub fn add_partials(&mut self, pattern: &str) -> Result<()> {
        let partials = glob(pattern).map_err(Error::Pattern)?;

        for partial in partials {
            let partial = partial.map_err(Error::Glob)?;
            let name = match partial.file_stem().and_then(|stem| stem.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            let content = fs::read_to_string(&partial).map_err(Error::Io)?;

            log::info!("adding partial {}", name);
            self.registry
                .register_partial(name.as_str(), content)
                .map_err(Error::Template)?;
        }

        Ok(())
    }

    pub fn add_template<P: AsRef<Path>>(&mut self, name: &str, path: P) -> Result<()> {
        log::debug!("adding template {} from {:?}", name, path.as_ref());
        self.registry
            .register_template_file(name, path)
            .map_err(Error::Template)
    }

    pub fn render<S: Serialize>(&self, template: &str, data: &S) -> Result<String> {
        self.registry
            .render(template, data)
            .map_err(Error::Render)
    }

    pub fn render_to_file<S: Serialize, P: AsRef<Path>>(
        &self,
        template: &str,
        data: &S,
        path: P,
    ) -> Result<()> {
        let path = path.as_ref();
        log::debug!("render {} -> {:?}", template, path);

        let file = File::create(path).map_err(Error::Io)?;
        let file = BufWriter::new(file);
        self.registry
            .render_to_write(template, data, file)
            .map_err(Error::Render)
    }
}

impl Default for HandlebarsCompiler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[derive(Serialize)]
    struct Page<'a> {
        title: &'a str,
        body: &'a str,
    }

    #[test]
    fn renders_templates_with_partials() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("partials")).unwrap();
        fs::write(dir.path().join("partials/header.hbs"), "<h1>{{title}}</h1>").unwrap();
        fs::write(dir.path().join("page.hbs"), "{{> header}}{{{body}}}").unwrap();

        let mut compiler = HandlebarsCompiler::new();
        let pattern = format!("{}/partials/*.hbs", dir.path().display());
        compiler.add_partials(pattern.as_str()).unwrap();
        compiler.add_template("page", dir.path().join("page.hbs")).unwrap();

        let page = Page {
            title: "A & B",
            body: "<p>hi</p>",
        };
        assert_eq!(
            compiler.render("page", &page).unwrap(),
            "<h1>A &amp; B</h1><p>hi</p>"
        );

        let out = dir.path().join("page.html");
        compiler.render_to_file("page", &page, &out).unwrap();
        assert_eq!(
            fs::read_to_string(out).unwrap(),
            "<h1>A &amp; B</h1><p>hi</p>"
        );
    }

    #[test]
    fn missing_template_file() {
        let dir = tempdir().unwrap();
        let mut compiler = HandlebarsCompiler::new();

        let result = compiler.add_template("nope", dir.path().join("nope.hbs"));
        assert!(matches!(result, Err(Error::Template(_))));
    }
}
