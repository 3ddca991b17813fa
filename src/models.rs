use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One marketplace item as returned by the recommend API. Price fields are
/// integer micro-prices (1/100000 of the display currency); a negative value
/// means "not applicable".
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub stock: u64,
    pub price: i64,
    pub price_min: i64,
    pub price_max: i64,
    pub price_before_discount: i64,
    pub price_min_before_discount: i64,
    pub price_max_before_discount: i64,
    pub shopid: u64,
    pub itemid: u64,
    pub tier_variations: Vec<String>,
    pub sold: u64,
    pub historical_sold: u64,
}

/// One page of a store's catalog: the page's records plus the store-wide
/// record count declared by the upstream.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub total: u64,
    pub items: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendResponse {
    pub data: RecommendData,
}

#[derive(Debug, Deserialize)]
pub struct RecommendData {
    pub sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
pub struct Section {
    pub data: SectionData,
    pub total: u64,
}

#[derive(Debug, Deserialize)]
pub struct SectionData {
    pub item: Vec<ProductRecord>,
}

impl RecommendResponse {
    /// Everything this tool reads lives in the first section of the
    /// response. A response without sections is an upstream shape change.
    pub fn into_page(self) -> Result<CatalogPage> {
        let section = self
            .data
            .sections
            .into_iter()
            .next()
            .context("recommend response contained no sections")?;
        Ok(CatalogPage {
            total: section.total,
            items: section.data.item,
        })
    }
}

/// Flat CSV-oriented row. Field order here is the CSV column order.
#[derive(Debug, Serialize)]
pub struct ExportRow {
    pub name: String,
    pub is_discount: bool,
    pub price: f64,
    pub price_before_discount: String,
    pub stock: u64,
    pub product_link: String,
    pub price_max: f64,
    pub price_min: f64,
    pub price_max_before_discount: f64,
    pub price_min_before_discount: f64,
    pub sold: u64,
    pub historical_sold: u64,
    pub tier_variations: String,
}
