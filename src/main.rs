use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use catalog_sync::config::ClientConfig;
use catalog_sync::hooks::{SaveTrigger, SubmitHooks};
use catalog_sync::image::ImageNormalizer;
use catalog_sync::io::http::CatalogClient;
use catalog_sync::model::{Product, ProductForm};
use catalog_sync::{CatalogError, Result, logging, render, sync};
use clap::{Parser, Subcommand};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    logging::init_tracing(config.verbose)?;

    match cli.command {
        Command::Normalize { link } => {
            println!("{}", ImageNormalizer::new(config.sharing_host).normalize(&link));
            Ok(())
        }
        Command::List { html } => {
            let client = CatalogClient::new(config)?;
            let products = sync::list_products(&client).await;
            match html {
                Some(path) => {
                    let config = client.config();
                    let page = render::render_products(
                        &products,
                        client.normalizer(),
                        &config.placeholder_image,
                    );
                    std::fs::write(path, page)?;
                }
                None => print_table(&products),
            }
            Ok(())
        }
        Command::Add(args) => {
            let client = CatalogClient::new(config)?;
            let trigger = Arc::new(Mutex::new(SaveTrigger::default()));
            let hooks = SubmitHooks::new()
                .with_trigger(Arc::clone(&trigger))
                .on_loading_start({
                    let trigger = Arc::clone(&trigger);
                    move || {
                        if let Ok(trigger) = trigger.lock() {
                            eprintln!("{}", trigger.label());
                        }
                    }
                })
                .on_success(|message| println!("{message}"));
            sync::submit_product(&client, args.into_form(), &hooks)
                .await
                .map(|_| ())
        }
        Command::Ping => {
            let client = CatalogClient::new(config)?;
            if client.probe().await {
                println!("API connection test result: SUCCESS");
                Ok(())
            } else {
                Err(CatalogError::Application(
                    "API connection test result: FAILED".into(),
                ))
            }
        }
    }
}

fn print_table(products: &[Product]) {
    if products.is_empty() {
        println!("No products found");
        return;
    }
    println!("{:<12} {:<30} {:>10} {:>8} {:<16}", "CODE", "NAME", "PRICE", "QTY", "CATEGORY");
    for product in products {
        println!(
            "{:<12} {:<30} {:>10} {:>8} {:<16}",
            product.code(),
            product.name(),
            product.price(),
            product.quantity(),
            product.category()
        );
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "List and add products in a spreadsheet-backed catalog."
)]
struct Cli {
    /// Catalog endpoint URL; overrides the config file.
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds; overrides the config file.
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Log request and response payloads.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the catalog and print it, or write it as HTML cards.
    List {
        /// Write product cards to this HTML file instead of printing a table.
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Add a product to the catalog.
    Add(AddArgs),
    /// Print the direct-view form of an image sharing link.
    Normalize { link: String },
    /// Check that the endpoint is reachable and answers with JSON.
    Ping,
}

#[derive(clap::Args)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    price: String,
    #[arg(long)]
    quantity: String,
    #[arg(long)]
    code: String,
    #[arg(long)]
    category: String,
    #[arg(long)]
    popular_name: Option<String>,
    /// Image link; sharing links are rewritten to direct-view links.
    #[arg(long)]
    image: Option<String>,
}

impl AddArgs {
    fn into_form(self) -> ProductForm {
        ProductForm {
            name: Some(self.name),
            price: Some(self.price),
            quantity: Some(self.quantity),
            code: Some(self.code),
            category: Some(self.category),
            popular_name: self.popular_name,
            image_link: self.image,
        }
    }
}

impl Cli {
    fn resolve_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(CatalogError::MissingConfig(path.clone()));
                }
                ClientConfig::from_json_file(path)?
            }
            None => ClientConfig::default(),
        };
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_ms = secs.saturating_mul(1000);
        }
        config.verbose |= self.verbose;
        Ok(config)
    }
}
