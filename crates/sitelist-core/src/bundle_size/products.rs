//! Minimal product catalog structures, as returned by the products endpoint.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub supported_bundles: Option<Vec<SupportedBundle>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SupportedBundle {
    pub quantity: u32,
}

/// Load a JSON array of products from disk.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let products: Vec<Product> = serde_json::from_str(&data)
        .with_context(|| format!("parse products from {}", path.display()))?;
    tracing::debug!(count = products.len(), "loaded products from {}", path.display());
    Ok(products)
}
