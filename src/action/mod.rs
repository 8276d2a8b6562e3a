use crate::Error;
use presctl_client::TemplateClient;
use presctl_prelude::TemplateRef;
use std::io::Write;
use std::path::PathBuf;

mod create;
mod delete;
mod get;
mod update;

#[derive(clap::Subcommand)]
pub enum Action {
    /// Create a new template
    Create(create::Action),
    /// Update an existing template
    Update(update::Action),
    /// Delete an existing template
    Delete(delete::Action),
    /// Fetch an existing template, printed or saved to a file
    Get(get::Action),
}

impl Action {
    pub async fn execute<W: Write>(self, client: &TemplateClient, out: &mut W) -> Result<(), Error> {
        match self {
            Self::Create(inner) => inner.execute(client, out).await,
            Self::Update(inner) => inner.execute(client, out).await,
            Self::Delete(inner) => inner.execute(client, out).await,
            Self::Get(inner) => inner.execute(client, out).await,
        }
    }
}

/// Location of the template on the service.
#[derive(clap::Args)]
pub struct Target {
    /// Name of the project owning the template.
    #[clap(short, long)]
    pub project: String,
    /// Name of the action the template is used for.
    #[clap(short, long)]
    pub action: String,
    /// Name of the template.
    pub name: String,
}

impl From<Target> for TemplateRef {
    fn from(value: Target) -> Self {
        TemplateRef::new(value.project, value.action, value.name)
    }
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
pub struct Content {
    /// Content of the template.
    #[clap(long)]
    pub content: Option<String>,
    /// Path to a file holding the content of the template.
    #[clap(short, long)]
    pub file: Option<PathBuf>,
}

impl Content {
    fn read(self) -> Result<String, Error> {
        match (self.content, self.file) {
            (Some(content), None) => Ok(content),
            (None, Some(path)) => std::fs::read_to_string(&path).map_err(|source| {
                tracing::error!("unable to read template file {:?}: {:?}", path, source);
                Error::ContentRead { path, source }
            }),
            (Some(_), Some(_)) => Err(Error::ContentConflict),
            (None, None) => Err(Error::ContentMissing),
        }
    }
}
