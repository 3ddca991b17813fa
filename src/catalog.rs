use anyhow::Result;

use crate::fetcher::{PAGE_SIZE, PageFetcher};
use crate::models::ProductRecord;

/// Collects the complete product list of a store by paging through the
/// catalog endpoint in strictly sequential, increasing-offset order.
///
/// The first page's `total` is authoritative for the whole run: it decides
/// how many further pages are requested and is not re-checked against what
/// later pages actually return.
pub fn collect_products(fetcher: &impl PageFetcher, shop_id: u64) -> Result<Vec<ProductRecord>> {
    let first = fetcher.fetch_page(shop_id, 0)?;
    let total = first.total;
    let mut products = first.items;

    if total as usize <= products.len() {
        return Ok(products);
    }

    // Requests stay sequential; the upstream's throttling is undocumented.
    let extra_pages = total.div_ceil(PAGE_SIZE) - 1;
    for page in 1..=extra_pages {
        let next = fetcher.fetch_page(shop_id, page * PAGE_SIZE)?;
        products.extend(next.items);
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogPage;
    use std::cell::RefCell;

    struct FakeFetcher {
        total: u64,
        page_len: u64,
        offsets_seen: RefCell<Vec<u64>>,
    }

    impl FakeFetcher {
        fn new(total: u64, page_len: u64) -> Self {
            Self {
                total,
                page_len,
                offsets_seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageFetcher for FakeFetcher {
        fn fetch_page(&self, shop_id: u64, offset: u64) -> Result<CatalogPage> {
            self.offsets_seen.borrow_mut().push(offset);
            let remaining = self.total.saturating_sub(offset);
            let count = remaining.min(self.page_len);
            let items = (0..count)
                .map(|i| record(shop_id, offset + i))
                .collect();
            Ok(CatalogPage {
                total: self.total,
                items,
            })
        }
    }

    fn record(shop_id: u64, item_id: u64) -> ProductRecord {
        ProductRecord {
            name: format!("Item {item_id}"),
            stock: 1,
            price: 100000,
            price_min: 100000,
            price_max: 100000,
            price_before_discount: 100000,
            price_min_before_discount: 100000,
            price_max_before_discount: 100000,
            shopid: shop_id,
            itemid: item_id,
            tier_variations: vec![],
            sold: 0,
            historical_sold: 0,
        }
    }

    #[test]
    fn paginates_in_offset_order_until_the_declared_total() {
        let fetcher = FakeFetcher::new(250, 100);
        let products = collect_products(&fetcher, 7).unwrap();

        assert_eq!(*fetcher.offsets_seen.borrow(), vec![0, 100, 200]);
        assert_eq!(products.len(), 250);
        // Accumulation order is offset order.
        assert_eq!(products[0].itemid, 0);
        assert_eq!(products[100].itemid, 100);
        assert_eq!(products[249].itemid, 249);
    }

    #[test]
    fn a_single_page_store_needs_exactly_one_fetch() {
        let fetcher = FakeFetcher::new(50, 100);
        let products = collect_products(&fetcher, 7).unwrap();

        assert_eq!(*fetcher.offsets_seen.borrow(), vec![0]);
        assert_eq!(products.len(), 50);
    }

    #[test]
    fn an_exactly_full_first_page_needs_exactly_one_fetch() {
        let fetcher = FakeFetcher::new(100, 100);
        let products = collect_products(&fetcher, 7).unwrap();

        assert_eq!(*fetcher.offsets_seen.borrow(), vec![0]);
        assert_eq!(products.len(), 100);
    }

    #[test]
    fn a_short_later_page_is_tolerated_silently() {
        // Upstream promises 150 but hands back only 30 records at offset 100.
        struct ShortSecondPage(FakeFetcher);
        impl PageFetcher for ShortSecondPage {
            fn fetch_page(&self, shop_id: u64, offset: u64) -> Result<CatalogPage> {
                let mut page = self.0.fetch_page(shop_id, offset)?;
                if offset > 0 {
                    page.items.truncate(30);
                }
                Ok(page)
            }
        }

        let fetcher = ShortSecondPage(FakeFetcher::new(150, 100));
        let products = collect_products(&fetcher, 7).unwrap();
        assert_eq!(products.len(), 130);
    }
}
