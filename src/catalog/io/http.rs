use std::time::Instant;

use reqwest::{Client, RequestBuilder};
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::catalog::config::ClientConfig;
use crate::catalog::error::{CatalogError, Result};
use crate::catalog::image::ImageNormalizer;
use crate::catalog::io::envelope::Envelope;
use crate::catalog::model::{NewProduct, Product, RowTable};

/// HTTP client for the remote catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    endpoint: Url,
    config: ClientConfig,
    normalizer: ImageNormalizer,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let http = Client::builder().build()?;
        let normalizer = ImageNormalizer::new(config.sharing_host.clone());
        Ok(Self {
            http,
            endpoint,
            config,
            normalizer,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn normalizer(&self) -> &ImageNormalizer {
        &self.normalizer
    }

    /// Lists the catalog. Every failure is logged and yields an empty list.
    pub async fn fetch_products(&self) -> Vec<Product> {
        match self.try_fetch_products().await {
            Ok(products) => products,
            Err(err) => {
                error!(error = %err, "error fetching products");
                Vec::new()
            }
        }
    }

    /// Lists the catalog, reporting why the listing failed.
    #[instrument(level = "info", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn try_fetch_products(&self) -> Result<Vec<Product>> {
        let body = self.exchange(self.http.get(self.endpoint.clone())).await?;
        let envelope = Envelope::parse(&body)?.into_success()?;
        let data = envelope
            .data
            .ok_or_else(|| CatalogError::Application("response carried no data".into()))?;
        let products = RowTable::from_json(&data)?.into_products();
        info!(product_count = products.len(), "fetched products");
        if self.config.verbose {
            debug!(?products, "processed products");
        }
        Ok(products)
    }

    /// Posts a product and returns the success envelope.
    #[instrument(level = "info", skip_all, fields(endpoint = %self.endpoint, code = %product.code))]
    pub async fn post_product(&self, product: &NewProduct) -> Result<Envelope> {
        let payload = serde_json::to_string(product)?;
        if self.config.verbose {
            debug!(%payload, "request payload");
        }
        let request = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);
        let body = self.exchange(request).await?;
        let envelope = Envelope::parse(&body)?.into_success()?;
        info!(name = %product.name, "product added");
        Ok(envelope)
    }

    /// Checks that the endpoint answers with a 2xx JSON body.
    #[instrument(level = "info", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn probe(&self) -> bool {
        let started = Instant::now();
        let outcome = self
            .exchange(self.http.get(self.endpoint.clone()))
            .await
            .and_then(|body| {
                serde_json::from_str::<serde_json::Value>(&body).map_err(CatalogError::from)
            });
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match outcome {
            Ok(_) => {
                info!(elapsed_ms, "connection test succeeded");
                true
            }
            Err(err) => {
                info!(elapsed_ms, error = %err, "connection test failed");
                false
            }
        }
    }

    /// Sends `request` and reads the body, bounded by the configured timeout.
    async fn exchange(&self, request: RequestBuilder) -> Result<String> {
        let limit = self.config.timeout();
        match tokio::time::timeout(limit, read_body(request, self.config.verbose)).await {
            Ok(result) => result,
            Err(_) => Err(CatalogError::Timeout(limit)),
        }
    }
}

/// Non-2xx responses fail without reading the body.
async fn read_body(request: RequestBuilder, verbose: bool) -> Result<String> {
    let started = Instant::now();
    let response = request.send().await?;
    let status = response.status();
    debug!(
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "response received"
    );
    if !status.is_success() {
        return Err(CatalogError::HttpStatus(status.as_u16()));
    }
    let body = response.text().await?;
    if verbose {
        debug!(%body, "response body");
    }
    Ok(body)
}
