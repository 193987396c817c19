//! # Text View
//!
//! Draws the storefront as plain text. Every function here is pure: it takes
//! data returned by a command and produces the string the loop prints.
//!
//! ## Screen Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  == The Adventurer's Emporium ==                         currency: EUR  │
//! │                                                                         │
//! │  PRODUCTS                                                               │
//! │    100  Apple                              €0.47   [in cart: 2]         │
//! │    200  Axe                               €33.16                        │
//! │                                                                         │
//! │  CART                                                                   │
//! │    100  Apple                  2 × €0.47   €0.94                        │
//! │                                                                         │
//! │  CHECKOUT                                                               │
//! │    Items: 2   Total: €0.94   Paid: €0.00                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::{Currency, Money, PaymentOutcome, PaymentStatus, Product, Store};

use crate::commands::cart::CartResponse;
use crate::commands::Reply;
use crate::state::ConfigState;

/// Renders an amount with the symbol of `currency`, e.g. `€0.47`.
pub fn format_money(amount: Money, currency: Currency) -> String {
    amount.display_with(currency.symbol())
}

/// Store banner with the selected currency.
pub fn draw_header(config: &ConfigState, store: &Store) -> String {
    format!("== {} ==   currency: {}", config.store_name, store.currency())
}

/// The product grid, one row per product.
pub fn draw_products(products: &[Product], currency: Currency) -> String {
    let mut lines = vec!["PRODUCTS".to_string()];
    if products.is_empty() {
        lines.push("  (no products on the shelf)".to_string());
    }
    for product in products {
        let mut row = format!(
            "  {:>5}  {:<28} {:>12}",
            product.product_id,
            product.name,
            format_money(product.price, currency)
        );
        if product.in_cart() {
            row.push_str(&format!("   [in cart: {}]", product.quantity));
        }
        lines.push(row);
    }
    lines.join("\n")
}

/// Full details of one product.
pub fn draw_product(product: &Product, currency: Currency) -> String {
    [
        format!("{} (#{})", product.name, product.product_id),
        format!("  price:     {}", format_money(product.price, currency)),
        format!("  base (USD): {}", format_money(product.base_price, Currency::REFERENCE)),
        format!("  kind:      {:?}", product.kind),
        format!("  image:     {}", product.image),
        format!("  in cart:   {}", product.quantity),
    ]
    .join("\n")
}

/// Cart rows in cart order.
pub fn draw_cart(cart: &CartResponse, currency: Currency) -> String {
    let mut lines = vec!["CART".to_string()];
    if cart.items.is_empty() {
        lines.push("  (empty)".to_string());
    }
    for line in &cart.items {
        lines.push(format!(
            "  {:>5}  {:<24} {:>3} × {:<10} {:>12}",
            line.product_id,
            line.name,
            line.quantity,
            format_money(line.unit_price, currency),
            format_money(line.line_total, currency)
        ));
    }
    lines.join("\n")
}

/// Checkout summary: how many items, what they cost, what is paid so far.
pub fn draw_checkout(cart: &CartResponse, paid: Money, currency: Currency) -> String {
    format!(
        "CHECKOUT\n  Items: {}   Total: {}   Paid: {}",
        cart.totals.total_quantity,
        format_money(cart.totals.total, currency),
        format_money(paid, currency)
    )
}

/// Result of a payment.
pub fn draw_payment(outcome: &PaymentOutcome, currency: Currency) -> String {
    let money = |amount| format_money(amount, currency);
    let mut lines = vec![format!(
        "PAYMENT\n  Cart total: {}   Tendered: {}   Total paid: {}",
        money(outcome.cart_total),
        money(outcome.tendered),
        money(outcome.total_paid)
    )];

    match outcome.status {
        PaymentStatus::Outstanding => {
            lines.push(format!("  Remaining balance: {}", money(outcome.amount_owed())));
        }
        PaymentStatus::Settled => {
            lines.push(format!("  Paid in full. Change due: {}", money(outcome.change_due())));
        }
    }
    lines.join("\n")
}

/// Currency picker with the selection marked.
pub fn draw_currencies(currencies: &[(Currency, bool)]) -> String {
    let mut lines = vec!["CURRENCIES".to_string()];
    for (currency, selected) in currencies {
        let marker = if *selected { "*" } else { " " };
        lines.push(format!(" {} {} ({})", marker, currency, currency.symbol()));
    }
    lines.join("\n")
}

/// Effective configuration.
pub fn draw_config(config: &ConfigState) -> String {
    [
        "CONFIG".to_string(),
        format!("  store name:        {}", config.store_name),
        format!("  opening currency:  {}", config.currency),
        format!("  random storefront: {}", config.random_storefront),
        format!(
            "  products shown:    {}..={}",
            config.selection.min(),
            config.selection.max()
        ),
        format!(
            "  seed:              {}",
            config.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string())
        ),
    ]
    .join("\n")
}

/// Command reference.
pub fn draw_help() -> String {
    [
        "COMMANDS",
        "  products                         list the shelf",
        "  show <id>                        product details",
        "  cart                             cart and checkout",
        "  add <id>                         add one to the cart",
        "  inc <id> / dec <id>              change quantity by one",
        "  remove <id>                      drop from the cart",
        "  empty                            empty the cart",
        "  pay <amount>                     tender cash",
        "  currency [USD|EUR|YEN]           list or select currency",
        "  new-id                           suggest an id for a new product",
        "  new <id> <price> <image> <name>  add a product",
        "  config                           show configuration",
        "  json                             print a JSON snapshot",
        "  help                             this list",
        "  quit                             leave the store",
    ]
    .join("\n")
}

/// Draws the complete screen: header, products, cart and checkout.
pub fn draw_storefront(config: &ConfigState, store: &Store) -> String {
    let cart = CartResponse::from(store);
    let currency = store.currency();
    [
        draw_header(config, store),
        draw_products(store.products(), currency),
        draw_cart(&cart, currency),
        draw_checkout(&cart, store.amount_paid(), currency),
    ]
    .join("\n\n")
}

/// Turns a command reply into text.
///
/// Mutations redraw what they touched: cart changes redraw the cart and
/// checkout; a currency change or new product redraws the whole storefront.
pub fn render(reply: &Reply, config: &ConfigState, store: &Store) -> String {
    let currency = store.currency();
    match reply {
        Reply::Products(products) => draw_products(products, currency),
        Reply::Product(product) => draw_product(product, currency),
        Reply::Cart(cart) => [
            draw_cart(cart, currency),
            draw_checkout(cart, store.amount_paid(), currency),
        ]
        .join("\n\n"),
        Reply::Payment(outcome) => draw_payment(outcome, currency),
        Reply::CurrencySelected(_) => draw_storefront(config, store),
        Reply::Currencies(currencies) => draw_currencies(currencies),
        Reply::NextId(id) => format!("Next free product id: {}", id),
        Reply::ProductAdded(product) => format!(
            "Added {} (#{}) at {}\n\n{}",
            product.name,
            product.product_id,
            format_money(product.price, currency),
            draw_storefront(config, store)
        ),
        Reply::Config(config) => draw_config(config),
        Reply::Json(json) => json.clone(),
        Reply::Help => draw_help(),
        Reply::Quit => "Farewell, traveller.".to_string(),
    }
}
