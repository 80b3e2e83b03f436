//! Renders a display collection as a text table.

use crate::model::Product;
use comfy_table::{presets, CellAlignment, Table};

/// One row per product, numbered from 1 in display order.
pub fn product_table(products: &[Product]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_FULL_CONDENSED)
        .set_header(["#", "Id", "Name", "Category", "Price", "Stock"]);

    for (index, product) in products.iter().enumerate() {
        table.add_row([
            (index + 1).to_string(),
            product.id.to_string(),
            product.name.clone(),
            product.category.clone(),
            format!("{:.2}", product.price),
            product.stock.to_string(),
        ]);
    }

    for col in [0, 1, 4, 5] {
        if let Some(column) = table.column_mut(col) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_display_order() {
        let products = vec![
            Product::new(8, "Stapler", "Office", 7.25, 14),
            Product::new(2, "Chair", "Furniture", 89.0, 3),
        ];
        let rendered = product_table(&products).to_string();

        let stapler = rendered.find("Stapler").unwrap();
        let chair = rendered.find("Chair").unwrap();
        assert!(stapler < chair);
        assert!(rendered.contains("7.25"));
        assert!(rendered.contains("89.00"));
    }

    #[test]
    fn test_empty_collection_renders_header_only() {
        let rendered = product_table(&[]).to_string();
        assert!(rendered.contains("Category"));
        assert!(!rendered.contains("Stapler"));
    }
}
