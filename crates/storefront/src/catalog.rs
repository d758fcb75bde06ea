//! The fixed product catalog.
//!
//! The catalog is immutable and hardcoded: it is built once at process start
//! and has no further lifecycle. Front ends read it directly; the cart store
//! never consults it.

use paradise_nursery_core::{Price, Product, ProductId};
use rust_decimal::Decimal;

/// The static source of available products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The built-in Paradise Nursery catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: vec![
                product(
                    "p1",
                    "Fiddle Leaf Fig",
                    "Tree",
                    4999,
                    "https://picsum.photos/id/1011/300/200",
                ),
                product(
                    "p2",
                    "Snake Plant",
                    "Succulents",
                    1999,
                    "https://picsum.photos/id/102/300/200",
                ),
                product(
                    "p3",
                    "Monstera Deliciosa",
                    "Tropical",
                    3999,
                    "https://picsum.photos/id/103/300/200",
                ),
                product(
                    "p4",
                    "Pothos",
                    "Vines",
                    1499,
                    "https://picsum.photos/id/104/300/200",
                ),
                product(
                    "p5",
                    "String of Pearls",
                    "Succulents",
                    2499,
                    "https://picsum.photos/id/105/300/200",
                ),
                product(
                    "p6",
                    "Peace Lily",
                    "Flowering",
                    2250,
                    "https://picsum.photos/id/106/300/200",
                ),
            ],
        }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == *id)
    }

    /// Distinct category names, in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(product.category.as_str());
            }
        }
        categories
    }

    /// Products belonging to `category`, in catalog order.
    #[must_use]
    pub fn in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category == category)
            .collect()
    }
}

fn product(id: &str, name: &str, category: &str, cents: i64, image_ref: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category: category.to_owned(),
        price: Price::new(Decimal::new(cents, 2)),
        image_ref: image_ref.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.products().len(), 6);

        let fig = catalog.find(&ProductId::new("p1")).unwrap();
        assert_eq!(fig.name, "Fiddle Leaf Fig");
        assert_eq!(fig.category, "Tree");
        assert_eq!(fig.price, Price::from_cents(4999));
    }

    #[test]
    fn test_find_unknown_id() {
        let catalog = Catalog::builtin();
        assert!(catalog.find(&ProductId::new("p99")).is_none());
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.categories(),
            vec!["Tree", "Succulents", "Tropical", "Vines", "Flowering"]
        );
    }

    #[test]
    fn test_in_category_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let succulents: Vec<&str> = catalog
            .in_category("Succulents")
            .iter()
            .map(|product| product.id.as_str())
            .collect();
        assert_eq!(succulents, vec!["p2", "p5"]);
    }

    #[test]
    fn test_in_category_unknown_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.in_category("Cacti").is_empty());
    }
}
