//! Grid layout model for the catalog view.
//!
//! The view renders a divider followed by a 16-column responsive grid. Each
//! product gets one cell of a fixed width; an empty catalog yields an empty
//! grid under the same divider.

use crate::catalog::Catalog;
use crate::ids::ProductId;
use crate::product::Product;

/// Label of the divider above the grid.
pub const SHOP_ALL_HEADING: &str = "Shop All Products";

/// Width of every product cell, in grid columns out of 16.
pub const COLUMN_WIDTH: u8 = 5;

const WIDTH_WORDS: [&str; 16] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

/// One grid cell wrapping a single product card.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// Render key.
    pub key: ProductId,
    /// Width in grid columns.
    pub width: u8,
    /// Product handed to the card.
    pub product: Product,
}

impl GridCell {
    pub fn new(product: Product) -> Self {
        Self {
            key: product.id.clone(),
            width: COLUMN_WIDTH,
            product,
        }
    }

    /// CSS class for the cell, e.g. `"five wide column"`.
    pub fn width_class(&self) -> String {
        let index = usize::from(self.width.clamp(1, 16)) - 1;
        format!("{} wide column", WIDTH_WORDS[index])
    }
}

/// Layout of the whole catalog view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductGrid {
    cells: Vec<GridCell>,
}

impl ProductGrid {
    /// Lay out one cell per product, in catalog order.
    pub fn layout(catalog: &Catalog) -> Self {
        Self {
            cells: catalog.products().iter().cloned().map(GridCell::new).collect(),
        }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<GridCell> {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded(ids: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.replace(ids.iter().map(|id| Product::new(*id)).collect());
        catalog
    }

    #[test]
    fn test_grid_one_cell_per_product_in_order() {
        let grid = ProductGrid::layout(&loaded(&["p1", "p2"]));

        let keys: Vec<&str> = grid.cells().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["p1", "p2"]);
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_grid_empty_catalog_has_no_cells() {
        assert!(ProductGrid::layout(&Catalog::new()).is_empty());
        assert!(ProductGrid::layout(&loaded(&[])).is_empty());
        assert_eq!(SHOP_ALL_HEADING, "Shop All Products");
    }

    #[test]
    fn test_grid_cells_are_fixed_width() {
        let grid = ProductGrid::layout(&loaded(&["a", "b", "c"]));
        for cell in grid.cells() {
            assert_eq!(cell.width, COLUMN_WIDTH);
            assert_eq!(cell.width_class(), "five wide column");
        }
    }

    #[test]
    fn test_grid_cell_passes_product_through() {
        let product = Product::new("p1").with_field("name", json!("Mug"));
        let mut catalog = Catalog::new();
        catalog.replace(vec![product.clone()]);

        let cell = ProductGrid::layout(&catalog).into_cells().remove(0);
        assert_eq!(cell.product, product);
    }

    #[test]
    fn test_width_class_clamps() {
        let mut cell = GridCell::new(Product::new("p1"));
        cell.width = 0;
        assert_eq!(cell.width_class(), "one wide column");
        cell.width = 40;
        assert_eq!(cell.width_class(), "sixteen wide column");
    }
}
