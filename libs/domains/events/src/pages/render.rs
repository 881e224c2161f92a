use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

const PARTIALS: [(&str, &str); 2] = [
    ("header", include_str!("../../templates/header.hbs")),
    ("footer", include_str!("../../templates/footer.hbs")),
];

const PAGES: [(&str, &str); 3] = [
    ("index", include_str!("../../templates/index.hbs")),
    ("form", include_str!("../../templates/form.hbs")),
    ("message", include_str!("../../templates/message.hbs")),
];

/// Handlebars registry with every page template compiled at startup.
///
/// Output is HTML-escaped.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();

        for (name, source) in PARTIALS {
            handlebars.register_partial(name, source)?;
        }
        for (name, source) in PAGES {
            handlebars.register_template_string(name, source)?;
        }

        Ok(Self { handlebars })
    }

    pub fn render<T: Serialize>(&self, page: &str, data: &T) -> Result<String, RenderError> {
        self.handlebars.render(page, data)
    }
}
