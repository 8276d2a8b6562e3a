use super::{Content, Target};
use crate::Error;
use presctl_client::TemplateClient;
use presctl_prelude::TemplateRef;
use std::io::Write;

#[derive(clap::Parser)]
pub struct Action {
    #[clap(flatten)]
    pub target: Target,
    #[clap(flatten)]
    pub content: Content,
}

impl Action {
    pub(crate) async fn execute<W: Write>(
        self,
        client: &TemplateClient,
        out: &mut W,
    ) -> Result<(), Error> {
        let content = self.content.read()?;
        let reference = TemplateRef::from(self.target);
        client.update(&reference, content).await?;
        writeln!(out, "Success")?;
        Ok(())
    }
}
