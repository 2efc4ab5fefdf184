//! `sitelist bundle-size` / `sitelist set-bundle-size` – the `bundle_size` query parameter.

use anyhow::{Context, Result};
use sitelist_core::bundle_size::{
    bundle_size_from_url, load_products, supported_bundle_sizes, with_bundle_size,
};
use std::path::Path;
use url::Url;

/// Print the bundle size selected by `url`, given the optional product catalog.
pub fn run_bundle_size(url: &str, products: Option<&Path>) -> Result<()> {
    let url = Url::parse(url).with_context(|| format!("invalid URL: {url}"))?;
    let products = products.map(load_products).transpose()?;
    let supported = supported_bundle_sizes(products.as_deref());
    tracing::debug!(?supported, "supported bundle sizes");
    println!("{}", bundle_size_from_url(&url, &supported));
    Ok(())
}

/// Print `url` rewritten to carry `size`.
pub fn run_set_bundle_size(url: &str, size: u32) -> Result<()> {
    let url = Url::parse(url).with_context(|| format!("invalid URL: {url}"))?;
    println!("{}", with_bundle_size(&url, size));
    Ok(())
}
