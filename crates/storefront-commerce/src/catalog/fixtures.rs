//! Seed data for the mock catalog.

use crate::catalog::{Category, Product};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

const USD: Currency = Currency::USD;

fn unsplash(photo: &str, width: u32) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?auto=format&fit=crop&w={}&q=80",
        photo, width
    )
}

/// The demo storefront's products.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Modern Minimalist Desk Lamp", Money::new(5999, USD))
            .with_description(
                "Elegant desk lamp with adjustable brightness, perfect for your workspace or bedside table.",
            )
            .with_image(unsplash("1507473885765-e6ed057f782c", 2340))
            .with_category("Home Decor")
            .featured()
            .with_rating(4.8)
            .with_stock(45)
            .with_tag("lighting")
            .with_tag("desk")
            .with_tag("modern"),
        Product::new(ProductId::new(2), "Premium Wireless Headphones", Money::new(19999, USD))
            .with_description(
                "High-fidelity sound with noise cancellation technology for an immersive audio experience.",
            )
            .with_image(unsplash("1505740420928-5e560c06d30e", 2340))
            .with_category("Electronics")
            .featured()
            .with_rating(4.9)
            .with_stock(28)
            .with_tag("audio")
            .with_tag("wireless")
            .with_tag("premium"),
        Product::new(ProductId::new(3), "Organic Cotton T-Shirt", Money::new(2499, USD))
            .with_description(
                "Soft, breathable t-shirt made from 100% organic cotton for everyday comfort.",
            )
            .with_image(unsplash("1576566588028-4147f3842f27", 2664))
            .with_category("Clothing")
            .with_rating(4.5)
            .with_stock(120)
            .with_tag("clothing")
            .with_tag("sustainable")
            .with_tag("casual"),
        Product::new(ProductId::new(4), "Leather Weekender Bag", Money::new(14999, USD))
            .with_description(
                "Stylish leather travel bag with multiple compartments, perfect for short trips or gym sessions.",
            )
            .with_image(unsplash("1547949003-9792a18a2601", 2340))
            .with_category("Accessories")
            .featured()
            .with_rating(4.7)
            .with_stock(15)
            .with_tag("travel")
            .with_tag("leather")
            .with_tag("premium"),
        Product::new(ProductId::new(5), "Smart Fitness Watch", Money::new(12999, USD))
            .with_description(
                "Advanced fitness tracker with heart rate monitoring, GPS, and 7-day battery life.",
            )
            .with_image(unsplash("1523275335684-37898b6baf30", 2399))
            .with_category("Electronics")
            .with_rating(4.6)
            .with_stock(32)
            .with_tag("wearable")
            .with_tag("fitness")
            .with_tag("smartwatch"),
        Product::new(ProductId::new(6), "Ceramic Plant Pot Set", Money::new(3999, USD))
            .with_description(
                "Set of 3 handcrafted ceramic pots in varying sizes, perfect for your indoor plants.",
            )
            .with_image(unsplash("1485955900006-10f4d324d411", 2340))
            .with_category("Home Decor")
            .with_rating(4.3)
            .with_stock(22)
            .with_tag("home")
            .with_tag("plants")
            .with_tag("decor"),
        Product::new(ProductId::new(7), "Stainless Steel Water Bottle", Money::new(2999, USD))
            .with_description(
                "Insulated bottle that keeps drinks cold for 24 hours or hot for 12 hours. Eco-friendly and durable.",
            )
            .with_image(unsplash("1602143407151-7111542de6e8", 2340))
            .with_category("Accessories")
            .with_rating(4.4)
            .with_stock(65)
            .with_tag("eco-friendly")
            .with_tag("hydration")
            .with_tag("outdoor"),
        Product::new(ProductId::new(8), "Artisan Coffee Maker", Money::new(8999, USD))
            .with_description(
                "Precision-engineered coffee maker with temperature control for the perfect brew every time.",
            )
            .with_image(unsplash("1521649415036-659258dc424f", 2340))
            .with_category("Kitchen")
            .featured()
            .with_rating(4.7)
            .with_stock(18)
            .with_tag("coffee")
            .with_tag("kitchen")
            .with_tag("premium"),
    ]
}

/// The demo storefront's categories.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "home-decor",
            "Home Decor",
            "Stylish accessories to elevate your living space",
            unsplash("1513161455079-7dc1de15ef3e", 2532),
        ),
        Category::new(
            "electronics",
            "Electronics",
            "The latest gadgets and tech accessories",
            unsplash("1498049794561-7780e7231661", 2340),
        ),
        Category::new(
            "clothing",
            "Clothing",
            "Comfortable, stylish apparel for everyday wear",
            unsplash("1441986300917-64674bd600d8", 2340),
        ),
        Category::new(
            "accessories",
            "Accessories",
            "Essential accessories to complete your look",
            unsplash("1537832816519-689ad163238b", 2340),
        ),
        Category::new(
            "kitchen",
            "Kitchen",
            "Quality tools for cooking enthusiasts",
            unsplash("1556911220-bff31c812dba", 2568),
        ),
    ]
}
