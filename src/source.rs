use reqwest::{Client, Url};

use crate::error::LoadError;

/// Path of the shared navbar, relative to the root of the site.
pub const NAVBAR_PATH: &str = "/navbar.html";

/// Something able to retrieve markup given a site-relative path.
pub trait FragmentSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError>;
}

/// Retrieves fragments over HTTP(S) from a given site.
pub struct HttpSource {
    client: Client,
    site: Url,
}

impl HttpSource {
    pub fn new(site: Url) -> Self {
        Self::with_client(Client::new(), site)
    }

    pub fn with_client(client: Client, site: Url) -> Self {
        Self { client, site }
    }
}

impl FragmentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let url = self.site.join(path).map_err(|_| LoadError::Resolve {
            site: self.site.to_string(),
            path: path.to_string(),
        })?;
        log::debug!("Fetching navbar from {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(LoadError::fetching)?;
        // anything but 2xx, including a redirect that was not followed
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Fetch {
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(LoadError::fetching)
    }
}
