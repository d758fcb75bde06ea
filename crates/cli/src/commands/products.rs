//! Catalog browsing command.

use paradise_nursery_storefront::catalog::Catalog;

/// List the catalog, grouped by category.
pub fn list(catalog: &Catalog) {
    #[allow(clippy::print_stdout)]
    {
        for category in catalog.categories() {
            println!("{category}");
            for product in catalog.in_category(category) {
                println!("  {:<4} {:<20} {}", product.id, product.name, product.price);
            }
            println!();
        }
    }
}
