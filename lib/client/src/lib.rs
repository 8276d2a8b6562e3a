use presctl_prelude::{payload, Operation, TemplateRef};
use reqwest::{Method, Url};

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn build(&self) -> TemplateClient {
        tracing::debug!("building template client");
        TemplateClient::new(&self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to build template url: {0}")]
    UrlInvalid(url::ParseError),
    #[error("Unable to execute request: {0}")]
    RequestFailed(reqwest::Error),
    #[error("Operation failed. Returned status code: {0}")]
    Rejected(u16),
    #[error("Unable to read response body: {0}")]
    BodyReadFailed(reqwest::Error),
    #[error(transparent)]
    PayloadInvalid(#[from] payload::Error),
}

fn method(operation: Operation) -> Method {
    match operation {
        Operation::Create => Method::POST,
        Operation::Update => Method::PUT,
        Operation::Delete => Method::DELETE,
        Operation::Get => Method::GET,
    }
}

#[derive(Clone, Debug)]
pub struct TemplateClient {
    client: reqwest::Client,
    base_url: String,
}

impl TemplateClient {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{host}:{port}"),
        }
    }

    fn interpolate(&self, reference: &TemplateRef) -> String {
        format!("{}/{}", self.base_url, reference.path())
    }

    fn build_url(&self, reference: &TemplateRef) -> Result<Url, Error> {
        Url::parse(&self.interpolate(reference)).map_err(|err| {
            tracing::error!("unable to generate template url: {:?}", err);
            Error::UrlInvalid(err)
        })
    }

    async fn execute(
        &self,
        operation: Operation,
        reference: &TemplateRef,
        content: Option<String>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.build_url(reference)?;
        let method = method(operation);
        tracing::debug!("{} {}", method, url);
        let request = self.client.request(method, url);
        let request = match content {
            Some(content) if operation.sends_body() => request.body(content),
            _ => request,
        };
        let res = request.send().await.map_err(|err| {
            tracing::error!("unable to execute request: {:?}", err);
            Error::RequestFailed(err)
        })?;
        let status = res.status().as_u16();
        if status >= 300 {
            tracing::error!("template {} rejected with status {}", reference, status);
            return Err(Error::Rejected(status));
        }
        Ok(res)
    }

    pub async fn create(&self, reference: &TemplateRef, content: String) -> Result<(), Error> {
        tracing::debug!("creating template {}", reference);
        self.execute(Operation::Create, reference, Some(content))
            .await
            .map(|_| ())
    }

    pub async fn update(&self, reference: &TemplateRef, content: String) -> Result<(), Error> {
        tracing::debug!("updating template {}", reference);
        self.execute(Operation::Update, reference, Some(content))
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, reference: &TemplateRef) -> Result<(), Error> {
        tracing::debug!("deleting template {}", reference);
        self.execute(Operation::Delete, reference, None)
            .await
            .map(|_| ())
    }

    /// Fetches a template and returns it as an indented json document.
    pub async fn get(&self, reference: &TemplateRef) -> Result<String, Error> {
        tracing::debug!("loading template {}", reference);
        let res = self.execute(Operation::Get, reference, None).await?;
        let body = res.text().await.map_err(|err| {
            tracing::error!("unable to read template body: {:?}", err);
            Error::BodyReadFailed(err)
        })?;
        payload::decode(&body).map_err(|err| {
            tracing::error!("unable to decode template {}: {:?}", reference, err);
            Error::from(err)
        })
    }
}
