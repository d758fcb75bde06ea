//! Cart commands.

use paradise_nursery_core::ProductId;
use paradise_nursery_storefront::catalog::Catalog;
use paradise_nursery_storefront::store::CartStore;

/// Show cart contents with per-line subtotals and cart totals.
pub fn show(store: &CartStore) {
    let state = store.state();

    #[allow(clippy::print_stdout)]
    {
        println!("Your Cart");
        println!("Total items: {}", store.total_items());
        println!("Total price: {}", store.total_price());
        println!();

        if state.is_empty() {
            println!("Your cart is empty. Run 'pn-cli products' to browse.");
            return;
        }

        for line in state.lines() {
            println!("{} ({})", line.product.name, line.product.id);
            println!(
                "  Unit: {}  Qty: {}  Subtotal: {}",
                line.product.price,
                line.quantity,
                line.subtotal()
            );
        }
    }
}

/// Add one unit of a catalog product to the cart.
///
/// The catalog lookup happens here: the cart store accepts any product, but
/// the storefront only ever hands it products that exist in the catalog.
///
/// # Errors
///
/// Returns an error if `product_id` is not in the catalog.
pub fn add(
    catalog: &Catalog,
    store: &mut CartStore,
    product_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::new(product_id);
    let Some(product) = catalog.find(&id) else {
        return Err(format!("no product with id '{product_id}' in the catalog").into());
    };

    store.add_to_cart(product.clone());

    #[allow(clippy::print_stdout)]
    {
        println!(
            "Added {} to cart ({} items, {})",
            product.name,
            store.total_items(),
            store.total_price()
        );
    }
    Ok(())
}

/// Set the quantity of a cart line. Zero or less removes the line.
pub fn set(store: &mut CartStore, product_id: &str, quantity: i64) {
    let id = ProductId::new(product_id);
    let existed = store.state().line(&id).is_some();
    store.update_quantity(&id, quantity);

    #[allow(clippy::print_stdout)]
    {
        if !existed {
            println!("'{product_id}' is not in the cart; nothing to do.");
        } else if store.state().line(&id).is_some() {
            println!(
                "Set {product_id} to {quantity} ({} items, {})",
                store.total_items(),
                store.total_price()
            );
        } else {
            println!("Removed {product_id} from the cart.");
        }
    }
}

/// Remove a cart line. Absent ids are a silent no-op.
pub fn remove(store: &mut CartStore, product_id: &str) {
    let id = ProductId::new(product_id);
    store.remove_item(&id);

    #[allow(clippy::print_stdout)]
    {
        println!(
            "Removed {product_id} from the cart ({} items remaining)",
            store.total_items()
        );
    }
}

/// Empty the cart.
pub fn clear(store: &mut CartStore) {
    store.clear_cart();

    #[allow(clippy::print_stdout)]
    {
        println!("Cart cleared.");
    }
}

/// Checkout stub: prints the order summary and leaves the cart untouched.
pub fn checkout(store: &CartStore) {
    #[allow(clippy::print_stdout)]
    {
        if store.state().is_empty() {
            println!("Your cart is empty; nothing to check out.");
            return;
        }

        println!("Proceed to checkout");
        println!(
            "  {} items, {}",
            store.total_items(),
            store.total_price()
        );
        println!("Checkout is not implemented; your cart is unchanged.");
    }
}
