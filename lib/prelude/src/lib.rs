pub mod payload;

/// Identifies a template on the remote service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateRef {
    pub project: String,
    pub action: String,
    pub name: String,
}

impl TemplateRef {
    pub fn new(
        project: impl Into<String>,
        action: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            action: action.into(),
            name: name.into(),
        }
    }

    /// Path of the template on the service, without leading slash.
    pub fn path(&self) -> String {
        format!(
            "api/v1/templates/{}/{}/{}",
            self.project, self.action, self.name
        )
    }
}

impl std::fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.project, self.action, self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    Get,
}

impl Operation {
    pub fn sends_body(&self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }
}
