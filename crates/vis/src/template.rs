use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::render::error::RenderError;

const INDEX: &str = "index";

/// The templates of the host document.
pub(crate) struct TemplateEngine<'a> {
    template: TinyTemplate<'a>,
}

impl<'a> TemplateEngine<'a> {
    pub fn new() -> Result<TemplateEngine<'a>, RenderError> {
        let mut template = TinyTemplate::new();
        template.add_template(INDEX, include_str!("./template/index.html.tt"))?;

        Ok(Self { template })
    }

    pub fn render_index<C: Serialize>(&self, context: &C) -> Result<String, RenderError> {
        let text = self.template.render(INDEX, context)?;
        Ok(text)
    }
}
