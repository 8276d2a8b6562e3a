use super::Target;
use crate::Error;
use presctl_client::TemplateClient;
use presctl_prelude::TemplateRef;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(clap::Parser)]
pub struct Action {
    #[clap(flatten)]
    pub target: Target,
    /// Path of the file to save the template to, printed when missing.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

fn save_to_file(path: &Path, document: &str) -> Result<(), Error> {
    std::fs::write(path, document).map_err(|source| {
        tracing::error!("unable to save template to {:?}: {:?}", path, source);
        Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

impl Action {
    pub(crate) async fn execute<W: Write>(
        self,
        client: &TemplateClient,
        out: &mut W,
    ) -> Result<(), Error> {
        let reference = TemplateRef::from(self.target);
        let document = client.get(&reference).await?;
        match self.output {
            Some(path) => {
                save_to_file(&path, &document)?;
                writeln!(out, "Template saved to: {}", path.display())?;
            }
            None => writeln!(out, "Result: {document}")?,
        }
        writeln!(out, "Success")?;
        Ok(())
    }
}
