use anyhow::Context;
use std::sync::Arc;

use production_orders::{
    logging, AppConfig, Catalog, Customer, Metrics, OrderCommand, OrderCommandHandler,
    OrderManager, OrderReply, PaymentMethod, Product, ProductId, ProductStatus,
};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(&config.log_filter)?;

    tracing::info!("🚀 Starting production orders demo");

    // === 1. Load catalog ===
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog");
            Catalog::load(path)?
        }
        None => {
            tracing::info!("No catalog configured, using the bundled sample");
            Catalog::sample()?
        }
    };

    let marta = catalog
        .customer("dbianchi@mail.com")
        .cloned()
        .context("Sample customer Marta Bianchi missing from catalog")?;
    let luca = catalog
        .customer("lucarossi@atleta.com")
        .cloned()
        .context("Sample customer Luca Rossi missing from catalog")?;

    // Snapshots held by the caller, as a shop front end would
    let custom_suit = registered(&catalog, ProductId(103))?;
    let sold_out_suit = registered(&catalog, ProductId(102))?;

    // === 2. Order manager + metrics ===
    let manager = OrderManager::with_config(catalog.lines, config.manager.clone())?;
    let metrics = Arc::new(Metrics::new()?);
    let mut handler = OrderCommandHandler::new(manager, Arc::clone(&metrics));

    for row in handler.manager().summary() {
        tracing::info!("{row}");
    }

    // === 3. Orders ===
    tracing::info!("--- Order for an available product ---");
    let outcome = handler.handle(OrderCommand::PlaceOrder {
        customer: Arc::clone(&luca),
        product: custom_suit,
    });
    report(&outcome.message, outcome.succeeded);

    tracing::info!("--- Order for a sold out product ---");
    let outcome = handler.handle(OrderCommand::PlaceOrder {
        customer: Arc::clone(&marta),
        product: sold_out_suit,
    });
    report(&outcome.message, outcome.succeeded);

    tracing::info!("--- Customer with an invalid email ---");
    match Customer::new("Tony", "Stark", "iam.ironman", PaymentMethod::Cash) {
        Ok(customer) => tracing::error!(email = %customer.email(), "Invalid email was accepted"),
        Err(error) => tracing::info!(error = %error, "Invalid customer rejected"),
    }

    // === 4. New product for the kids line ===
    let slip = Product::plain("slip", ProductId(202), "8 anni", "Verde", ProductStatus::Available);

    tracing::info!("--- Order for a product not yet in production ---");
    let outcome = handler.handle(OrderCommand::PlaceOrder {
        customer: Arc::clone(&marta),
        product: slip.clone(),
    });
    report(&outcome.message, outcome.succeeded);

    tracing::info!("--- Adding the product to Linea Sea ---");
    let outcome = handler.handle(OrderCommand::AddProduct {
        line_name: "Linea Sea".to_string(),
        product: slip.clone(),
    });
    report(&outcome.message, outcome.succeeded);
    if let Some(OrderReply::Added(line)) = &outcome.data {
        let last = line.last().map(|p| p.id().to_string()).unwrap_or_default();
        tracing::info!(line = line.name(), products = line.len(), last_id = %last, "Line updated");
    }

    tracing::info!("--- Ordering the new product ---");
    let outcome = handler.handle(OrderCommand::PlaceOrder {
        customer: Arc::clone(&marta),
        product: slip,
    });
    report(&outcome.message, outcome.succeeded);

    // === 5. Final state ===
    for row in handler.manager().summary() {
        tracing::info!("{row}");
    }

    let history = serde_json::to_string_pretty(handler.manager().history())?;
    tracing::debug!("Event journal:\n{history}");
    tracing::debug!("Metrics:\n{}", metrics.encode()?);

    tracing::info!("✅ Demo finished");
    Ok(())
}

fn registered(catalog: &Catalog, id: ProductId) -> anyhow::Result<Product> {
    catalog
        .lines
        .iter()
        .find_map(|line| line.find(id))
        .map(|product| Product::clone(product))
        .with_context(|| format!("Product {id} missing from catalog"))
}

fn report(message: &str, succeeded: bool) {
    if succeeded {
        tracing::info!("{message}");
    } else {
        tracing::warn!("{message}");
    }
}
