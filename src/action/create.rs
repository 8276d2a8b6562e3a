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
        client.create(&reference, content).await?;
        writeln!(out, "Success")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::action::tests::run;
    use crate::Error;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn should_print_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/templates/demo/analyze/phones"))
            .and(body_string(r#"{"fields":[{"name":"PHONE_NUMBER"}]}"#))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (result, output) = run(
            &mock_server,
            &[
                "create",
                "--project",
                "demo",
                "--action",
                "analyze",
                "phones",
                "--content",
                r#"{"fields":[{"name":"PHONE_NUMBER"}]}"#,
            ],
        )
        .await;
        result.unwrap();
        assert_eq!(output, "Success\n");
    }

    #[tokio::test]
    async fn should_fail_when_rejected() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&mock_server)
            .await;

        let (result, output) = run(
            &mock_server,
            &["create", "-p", "demo", "-a", "analyze", "phones", "--content", "{}"],
        )
        .await;
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            Error::Client(presctl_client::Error::Rejected(400))
        ));
        assert!(err.to_string().contains("400"));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn should_not_send_when_file_missing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let (result, output) = run(
            &mock_server,
            &[
                "create",
                "-p",
                "demo",
                "-a",
                "analyze",
                "phones",
                "--file",
                "/this/file/does/not/exist.json",
            ],
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::ContentRead { .. }));
        assert!(output.is_empty());
    }
}
