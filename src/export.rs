use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::catalog::collect_products;
use crate::fetcher::PageFetcher;
use crate::models::{ExportRow, ProductRecord};
use crate::transform::{normalize_price, product_url};

/// Flattens one API record into the CSV row shape.
///
/// Quirks kept for output compatibility with existing consumers: `name` and
/// `tier_variations` carry literal quote characters inside the field value,
/// and only `price_before_discount` gets the negative-sentinel "N/A"
/// substitution; the other price fields are normalized unconditionally.
pub fn to_export_row(record: &ProductRecord) -> ExportRow {
    ExportRow {
        name: format!("\"{}\"", record.name),
        is_discount: record.price_before_discount != record.price,
        price: normalize_price(record.price),
        price_before_discount: if record.price_before_discount < 0 {
            "N/A".to_string()
        } else {
            normalize_price(record.price_before_discount).to_string()
        },
        stock: record.stock,
        product_link: product_url(&record.name, record.shopid, record.itemid),
        price_max: normalize_price(record.price_max),
        price_min: normalize_price(record.price_min),
        price_max_before_discount: normalize_price(record.price_max_before_discount),
        price_min_before_discount: normalize_price(record.price_min_before_discount),
        sold: record.sold,
        historical_sold: record.historical_sold,
        tier_variations: format!("\"{}\"", record.tier_variations.join(",")),
    }
}

fn rows_to_csv(rows: &[ExportRow]) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}

/// Collects the store's full catalog and writes it as
/// `{out_dir}/{file_name}.csv`, overwriting any existing file.
///
/// Fetch failures propagate; a file write failure is only reported on the
/// progress sink and does not fail the run.
pub fn export_store_catalog(
    fetcher: &impl PageFetcher,
    shop_id: u64,
    file_name: &str,
    out_dir: &Path,
    progress: &mut dyn Write,
) -> Result<()> {
    writeln!(progress, "Fetching for shopId: {shop_id}")?;
    let products = collect_products(fetcher, shop_id)?;
    writeln!(progress, "Fetching completed for shopId: {shop_id}")?;

    let rows: Vec<ExportRow> = products.iter().map(to_export_row).collect();
    let csv_text = rows_to_csv(&rows)?;

    let path = out_dir.join(format!("{file_name}.csv"));
    writeln!(progress, "Writing result to CSV")?;
    match fs::write(&path, csv_text) {
        Ok(()) => writeln!(progress, "Finish writing result to {}", path.display())?,
        Err(err) => writeln!(progress, "Error occurred while writing the file: {err}")?,
    }
    Ok(())
}
