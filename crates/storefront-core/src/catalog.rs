//! # Seed Catalog
//!
//! The built-in product table the storefront starts from.
//!
//! ## Table Layout
//! Each row is `(id, name, base price in cents, image stem, kind)`. Ids are
//! spaced by [`PRODUCT_ID_INTERVAL`](crate::PRODUCT_ID_INTERVAL) so new
//! products can be slotted in by the admin form.
//!
//! Images are served from `/images/products/<stem>.webp`.

use crate::money::Money;
use crate::types::ProductKind::{self, Arms, Consumable, Food, Magic, Utility};
use crate::types::{Product, ProductId};

/// Folder every seed image lives in.
pub const IMAGE_FOLDER: &str = "/images/products/";

/// Extension used when none is given.
pub const DEFAULT_IMAGE_EXT: &str = "webp";

const SEED: &[(u32, &str, i64, &str, ProductKind)] = &[
    (100, "Apple", 50, "apple", Food),
    (200, "Axe", 3565, "axe", Arms),
    (300, "Book Of Dark Magic", 8015, "book-of-dark-magic", Magic),
    (400, "Book Of Light Magic", 8015, "book-of-light-magic", Magic),
    (500, "Book Of The Danged", 8015, "book-of-the-danged", Magic),
    (600, "Burger", 425, "burger", Food),
    (700, "Cake", 635, "cake", Food),
    (800, "Cheese", 345, "cheese", Food),
    (900, "Chocolate Chip Cookie", 110, "chocolate-chip-cookie", Food),
    (1000, "Crossbow", 2575, "crossbow", Arms),
    (1100, "Elixir", 475, "elixir", Consumable),
    (1200, "Flask Of Water", 90, "flask-of-water", Consumable),
    (1300, "Fried Egg", 227, "fried-egg", Food),
    (1400, "Gauntlets", 2222, "gauntlets", Arms),
    (1500, "Health Potion", 50, "health-potion", Consumable),
    (1600, "Heavy Armor", 7070, "heavy-armor", Arms),
    (1700, "Hoodlum's Cap", 470, "hoodlums-cap", Arms),
    (1800, "Knight's Boots", 3333, "knights-boots", Arms),
    (1900, "Knight's Helm", 5678, "knights-helm", Arms),
    (2000, "Lantern", 1234, "lantern", Consumable),
    (2100, "Light Armor", 4242, "light-armor", Arms),
    (2200, "Long Sword", 4900, "long-sword", Arms),
    (2300, "Magic Amulet", 12000, "magic-amulet", Magic),
    (2400, "Magic Boots", 6095, "magic-boots", Magic),
    (2500, "Magic Powder", 2378, "magic-powder", Utility),
    (2600, "Magic Ring", 25000, "magic-ring", Utility),
    (2700, "Mana Potion", 75, "mana-potion", Consumable),
    (2800, "Minerva Armor", 20015, "minerva-armor", Magic),
    (2900, "Paladin Shield", 15263, "paladin-shield", Arms),
    (3000, "Shield", 6297, "shield", Arms),
    (3100, "Short Sword", 1999, "short-sword", Arms),
    (3200, "Slice Of Red Velvet Pie", 225, "slice-of-red-velvet-pie", Food),
    (3300, "Socks", 199, "socks", Utility),
    (3400, "Spear", 8280, "spear", Arms),
    (3500, "Staff Of Flames", 17845, "staff-of-flames", Magic),
    (3600, "Staff Of Ice", 19245, "staff-of-ice", Magic),
    (3700, "Staff Of Thunder", 22045, "staff-of-thunder", Magic),
    (3800, "T-Bone Steak", 1560, "t-bone-steak", Food),
    (3900, "Tiara", 3729, "tiara", Magic),
    (4000, "Torch", 25, "torch", Consumable),
    (4100, "Underwear", 478, "underwear", Utility),
    (4200, "Wizard's Cape", 9999, "wizards-cape", Magic),
    (4300, "Wizard's Hat", 7836, "wizards-hat", Magic),
];

/// Builds an image path for a file stem, e.g. `apple` →
/// `/images/products/apple.webp`.
///
/// ## Example
/// ```rust
/// use storefront_core::catalog::product_image_path;
///
/// assert_eq!(product_image_path("axe", None), "/images/products/axe.webp");
/// assert_eq!(product_image_path("axe", Some("png")), "/images/products/axe.png");
/// ```
pub fn product_image_path(stem: &str, ext: Option<&str>) -> String {
    format!("{}{}.{}", IMAGE_FOLDER, stem, ext.unwrap_or(DEFAULT_IMAGE_EXT))
}

/// Returns the full seed catalog, priced in the reference currency, every
/// quantity zero.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .filter_map(|&(id, name, cents, stem, kind)| {
            let id = ProductId::new(id)?;
            Some(Product::new(
                id,
                name,
                Money::from_cents(cents),
                product_image_path(stem, None),
                kind,
            ))
        })
        .collect()
}
