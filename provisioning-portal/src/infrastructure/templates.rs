use handlebars::Handlebars;
use serde::Serialize;

/// Pages of the portal, each backed by one handlebars template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Personal,
    Project,
    Confirm,
    Registered,
    Edit,
    EditConfirm,
    Complete,
    Delete,
    List,
    Error,
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Landing,
        Page::Personal,
        Page::Project,
        Page::Confirm,
        Page::Registered,
        Page::Edit,
        Page::EditConfirm,
        Page::Complete,
        Page::Delete,
        Page::List,
        Page::Error,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Personal => "personal",
            Page::Project => "project",
            Page::Confirm => "confirm",
            Page::Registered => "registered",
            Page::Edit => "edit",
            Page::EditConfirm => "edit_confirm",
            Page::Complete => "complete",
            Page::Delete => "delete",
            Page::List => "list",
            Page::Error => "error",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Page::Landing => include_str!("../../templates/landing.hbs"),
            Page::Personal => include_str!("../../templates/personal.hbs"),
            Page::Project => include_str!("../../templates/project.hbs"),
            Page::Confirm => include_str!("../../templates/confirm.hbs"),
            Page::Registered => include_str!("../../templates/registered.hbs"),
            Page::Edit => include_str!("../../templates/edit.hbs"),
            Page::EditConfirm => include_str!("../../templates/edit_confirm.hbs"),
            Page::Complete => include_str!("../../templates/complete.hbs"),
            Page::Delete => include_str!("../../templates/delete.hbs"),
            Page::List => include_str!("../../templates/list.hbs"),
            Page::Error => include_str!("../../templates/error.hbs"),
        }
    }
}

pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> anyhow::Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_partial("layout", include_str!("../../templates/partials/layout.hbs"))?;
        registry.register_partial("errors", include_str!("../../templates/partials/errors.hbs"))?;
        registry.register_partial(
            "request_detail",
            include_str!("../../templates/partials/request_detail.hbs"),
        )?;
        for page in Page::ALL {
            registry.register_template_string(page.name(), page.source())?;
        }
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, page: Page, data: &T) -> anyhow::Result<String> {
        Ok(self.registry.render(page.name(), data)?)
    }
}
