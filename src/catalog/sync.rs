use tracing::{error, info, instrument, warn};

use crate::catalog::error::Result;
use crate::catalog::hooks::{LoadingGuard, SubmitHooks};
use crate::catalog::io::envelope::Envelope;
use crate::catalog::io::http::CatalogClient;
use crate::catalog::model::{Product, ProductForm};

/// Lists the remote catalog. Failures are logged and produce an empty list.
#[instrument(level = "info", skip_all)]
pub async fn list_products(client: &CatalogClient) -> Vec<Product> {
    let products = client.fetch_products().await;
    if products.is_empty() {
        warn!("no products found");
    }
    products
}

/// Validates `form`, posts it, and reports the outcome through `hooks`.
///
/// The loading hooks bracket the whole call: the end hook fires on every
/// exit path, including validation failures and panics inside other hooks.
#[instrument(level = "info", skip_all)]
pub async fn submit_product(
    client: &CatalogClient,
    form: ProductForm,
    hooks: &SubmitHooks,
) -> Result<Envelope> {
    let _loading = LoadingGuard::start(hooks);

    let config = client.config();
    let outcome = match form.into_new_product(client.normalizer(), &config.placeholder_image) {
        Ok(product) => client
            .post_product(&product)
            .await
            .map(|envelope| (product, envelope)),
        Err(err) => Err(err),
    };

    match outcome {
        Ok((product, envelope)) => {
            info!(name = %product.name, "submission succeeded");
            hooks.succeeded(&format!("Product \"{}\" added successfully!", product.name));
            hooks.reset();
            Ok(envelope)
        }
        Err(err) => {
            error!(error = %err, "error adding product");
            hooks.failed(&err.user_message());
            Err(err)
        }
    }
}
