//! Product bundle size carried in the page URL's `bundle_size` query parameter.
//!
//! Size 1 is the default and is never written to the URL.

mod products;

use url::{form_urlencoded, Url};

pub use products::{load_products, Product, SupportedBundle};

pub const BUNDLE_SIZE_PARAM_KEY: &str = "bundle_size";
pub const DEFAULT_BUNDLE_SIZE: u32 = 1;

/// Bundle sizes offered across `products`: the default first, then each
/// distinct quantity in first-seen order. Without a catalog only the default
/// is offered.
pub fn supported_bundle_sizes(products: Option<&[Product]>) -> Vec<u32> {
    let mut sizes = vec![DEFAULT_BUNDLE_SIZE];
    let Some(products) = products else {
        return sizes;
    };
    let quantities = products
        .iter()
        .filter_map(|p| p.supported_bundles.as_deref())
        .flatten()
        .map(|b| b.quantity);
    for quantity in quantities {
        if !sizes.contains(&quantity) {
            sizes.push(quantity);
        }
    }
    sizes
}

/// The supported size whose decimal form equals `raw` exactly; otherwise the default.
pub fn select_bundle_size(supported: &[u32], raw: Option<&str>) -> u32 {
    raw.and_then(|raw| {
        supported
            .iter()
            .copied()
            .find(|size| *size != 0 && size.to_string() == raw)
    })
    .unwrap_or(DEFAULT_BUNDLE_SIZE)
}

/// Reads the selected size from `url`. With repeated keys the last one wins.
pub fn bundle_size_from_url(url: &Url, supported: &[u32]) -> u32 {
    let raw = url
        .query_pairs()
        .filter(|(key, _)| key == BUNDLE_SIZE_PARAM_KEY)
        .map(|(_, value)| value.into_owned())
        .last();
    select_bundle_size(supported, raw.as_deref())
}

/// Returns `url` with the bundle size applied: the default removes the
/// parameter, any other size replaces it in place (or appends it). Other
/// query pairs keep their order and their original encoding; empty `&&`
/// segments are dropped.
pub fn with_bundle_size(url: &Url, size: u32) -> Url {
    let mut segments: Vec<String> = Vec::new();
    let mut placed = size == DEFAULT_BUNDLE_SIZE;
    for segment in url.query().unwrap_or("").split('&') {
        if segment.is_empty() {
            continue;
        }
        if !is_bundle_size_segment(segment) {
            segments.push(segment.to_string());
        } else if !placed {
            segments.push(bundle_size_segment(size));
            placed = true;
        }
    }
    if !placed {
        segments.push(bundle_size_segment(size));
    }

    let mut out = url.clone();
    if segments.is_empty() {
        out.set_query(None);
    } else {
        out.set_query(Some(&segments.join("&")));
    }
    out
}

fn is_bundle_size_segment(segment: &str) -> bool {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .is_some_and(|(key, _)| key == BUNDLE_SIZE_PARAM_KEY)
}

fn bundle_size_segment(size: u32) -> String {
    format!("{BUNDLE_SIZE_PARAM_KEY}={size}")
}
