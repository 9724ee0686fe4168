//! Seed Catalog
//!
//! The static product set loaded once at startup.

use rust_decimal::Decimal;

use crate::catalog::Product;

const STANDARD_CARE: [&str; 4] = [
    "Machine wash cold",
    "Tumble dry low",
    "Do not bleach",
    "Iron on low heat if needed",
];

// Product photography hosted on the partner storefronts' CDNs.
const BACK_01: &str = "https://slaystay.com/cdn/shop/files/Back01.png?v=1729505541&width=493";
const FRONT_NOBERO: &str =
    "https://nobero.com/cdn/shop/files/WhatsAppImage2024-05-06at11.46.23AM.jpg?v=1723271991";
const BACK_GRAPHIC: &str = "https://slaystay.com/cdn/shop/files/BACK_86118012-80ef-45e9-9485-42a7fa8095d4.png?v=1729166191&width=493";
const BACK_VINTAGE: &str = "https://slaystay.com/cdn/shop/files/BACK_764418d4-6373-461a-9508-b12c83bff247.png?v=1729166138&width=493";
const BACK_GALLERY: &str = "https://slaystay.com/cdn/shop/files/BACK_d361e750-060e-4ffb-8595-8c5ac32c26ce.png?v=1729165735&width=493";

const FULL_SIZE_RUN: [&str; 5] = ["xs", "s", "m", "l", "xl"];

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    cents: i64,
    description: &'static str,
    image: &'static str,
    category: &'static str,
    colors: &'static [&'static str],
    sizes: &'static [&'static str],
    features: &'static [&'static str],
    care: &'static [&'static str],
}

const SEED: [SeedProduct; 8] = [
    SeedProduct {
        id: "1",
        name: "Classic Drop Shoulder Tee",
        cents: 2999,
        description: "A timeless drop shoulder t-shirt for everyday wear.",
        image: BACK_01,
        category: "basic",
        colors: &["black", "white", "gray", "navy"],
        sizes: &FULL_SIZE_RUN,
        features: &[
            "100% cotton fabric",
            "Relaxed drop shoulder fit",
            "Ribbed crew neck",
            "Reinforced stitching",
        ],
        care: &STANDARD_CARE,
    },
    SeedProduct {
        id: "2",
        name: "Oversized Drop Shoulder Tee",
        cents: 3499,
        description: "An extra roomy drop shoulder t-shirt for maximum comfort.",
        image: FRONT_NOBERO,
        category: "oversized",
        colors: &["black", "white", "beige", "olive"],
        sizes: &["s", "m", "l", "xl"],
        features: &[
            "95% cotton, 5% elastane",
            "Ultra-relaxed fit",
            "Extended drop shoulder",
            "Longer length",
        ],
        care: &STANDARD_CARE,
    },
    SeedProduct {
        id: "3",
        name: "Striped Drop Shoulder Tee",
        cents: 3299,
        description: "A stylish striped pattern on our signature drop shoulder cut.",
        image: BACK_01,
        category: "graphic",
        colors: &["navy/white", "black/white", "olive/beige"],
        sizes: &FULL_SIZE_RUN,
        features: &[
            "100% organic cotton",
            "Classic striped pattern",
            "Relaxed drop shoulder fit",
            "Sustainable production",
        ],
        care: &STANDARD_CARE,
    },
    SeedProduct {
        id: "4",
        name: "Graphic Drop Shoulder Tee",
        cents: 3999,
        description: "Express yourself with our artistic graphic drop shoulder tee.",
        image: BACK_GRAPHIC,
        category: "graphic",
        colors: &["white", "black", "gray"],
        sizes: &FULL_SIZE_RUN,
        features: &[
            "100% premium cotton",
            "Custom graphic print",
            "Relaxed drop shoulder fit",
            "Pre-shrunk fabric",
        ],
        care: &[
            "Machine wash cold",
            "Tumble dry low",
            "Do not bleach",
            "Turn inside out before washing",
        ],
    },
    SeedProduct {
        id: "5",
        name: "Premium Drop Shoulder Tee",
        cents: 4499,
        description: "Our highest quality drop shoulder t-shirt made from luxury materials.",
        image: BACK_GRAPHIC,
        category: "basic",
        colors: &["black", "white", "navy", "burgundy"],
        sizes: &FULL_SIZE_RUN,
        features: &[
            "Pima cotton blend",
            "Luxury finish",
            "Perfect drape",
            "Reinforced seams",
            "Tagless design",
        ],
        care: &STANDARD_CARE,
    },
    SeedProduct {
        id: "6",
        name: "Vintage Wash Drop Shoulder Tee",
        cents: 3699,
        description: "A pre-washed drop shoulder tee with a lived-in vintage feel.",
        image: BACK_VINTAGE,
        category: "basic",
        colors: &["washed black", "washed blue", "washed olive"],
        sizes: &FULL_SIZE_RUN,
        features: &[
            "100% cotton",
            "Vintage wash treatment",
            "Relaxed drop shoulder fit",
            "Slightly faded look",
        ],
        care: &STANDARD_CARE,
    },
    SeedProduct {
        id: "7",
        name: "Limited Edition Drop Shoulder Tee",
        cents: 4999,
        description: "A special limited run drop shoulder tee with unique detailing.",
        image: BACK_VINTAGE,
        category: "limited",
        colors: &["black", "white"],
        sizes: &["s", "m", "l", "xl"],
        features: &[
            "Limited production run",
            "Special edition design",
            "Numbered tag",
            "Premium materials",
            "Signature fit",
        ],
        care: &STANDARD_CARE,
    },
    SeedProduct {
        id: "8",
        name: "Pocket Drop Shoulder Tee",
        cents: 3299,
        description: "A practical drop shoulder tee with a chest pocket detail.",
        image: BACK_VINTAGE,
        category: "basic",
        colors: &["black", "white", "navy", "olive"],
        sizes: &FULL_SIZE_RUN,
        features: &[
            "100% cotton",
            "Single chest pocket",
            "Relaxed drop shoulder fit",
            "Reinforced stitching",
        ],
        care: &STANDARD_CARE,
    },
];

/// Shared gallery shown on every product page.
const GALLERY: [&str; 4] = [FRONT_NOBERO, BACK_GALLERY, FRONT_NOBERO, BACK_GALLERY];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Builds the seed product list in catalog order.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|seed| {
            let mut product = Product::new(
                seed.id,
                seed.name,
                Decimal::new(seed.cents, 2),
                seed.image,
            )
            .with_category(seed.category);
            product.description = Some(seed.description.to_string());
            product.images = owned(&GALLERY);
            product.colors = owned(seed.colors);
            product.sizes = owned(seed.sizes);
            product.features = owned(seed.features);
            product.care = owned(seed.care);
            product
        })
        .collect()
}
