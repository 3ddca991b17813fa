use anyhow::Result;
use reqwest::blocking::Client;

use crate::models::{CatalogPage, RecommendResponse};

/// Per 11 November 2022, requesting more than 100 items per call makes the
/// upstream silently return only 20, so the limit stays at 100.
pub const PAGE_SIZE: u64 = 100;

const CATALOG_ENDPOINT: &str = "https://shopee.co.id/api/v4/recommend/recommend";

pub fn catalog_url(shop_id: u64, limit: u64, offset: u64) -> String {
    format!(
        "{CATALOG_ENDPOINT}?bundle=shop_page_category_tab_main&item_card=2&limit={limit}&offset={offset}&section=shop_page_category_tab_main_sec&shopid={shop_id}&sort_type=1&step2_upstream=search&tab_name=popular&upstream=pdp"
    )
}

/// One catalog request at a given record offset. Implemented over HTTP in
/// production and faked in tests.
pub trait PageFetcher {
    fn fetch_page(&self, shop_id: u64, offset: u64) -> Result<CatalogPage>;
}

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpPageFetcher {
    /// Transport and parse errors propagate as-is; no retry, no deadline.
    fn fetch_page(&self, shop_id: u64, offset: u64) -> Result<CatalogPage> {
        let response: RecommendResponse = self
            .client
            .get(catalog_url(shop_id, PAGE_SIZE, offset))
            .header("X-Shopee-Language", "id")
            .send()?
            .json()?;

        response.into_page()
    }
}
