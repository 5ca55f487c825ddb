//! # Seed Data Generator
//!
//! Populates the database with development data: branches, garments,
//! customers, credit plans, and opening inventory.
//!
//! ## Usage
//! ```bash
//! # Default database path
//! cargo run -p boutique-db --bin seed
//!
//! # Specify database path
//! cargo run -p boutique-db --bin seed -- --db ./data/boutique.db
//! ```

use std::env;

use boutique_core::{
    Branch, CreditPlan, Customer, Frequency, GarmentType, Gender, Material, Person, Product,
    Season, Size, Style, Usage,
};
use boutique_db::{Database, DbConfig};
use uuid::Uuid;

/// Garment names per type, used round-robin.
const GARMENTS: &[(&str, GarmentType, Gender, Material, Usage, i64)] = &[
    ("Vestido Rojo", GarmentType::Dress, Gender::Womens, Material::Cotton, Usage::Occasion, 8999),
    ("Blusa Floral", GarmentType::Blouse, Gender::Womens, Material::Polyester, Usage::Daily, 3499),
    ("Jeans Slim", GarmentType::Jeans, Gender::Mens, Material::Denim, Usage::Daily, 5999),
    ("Polera Basica", GarmentType::TShirt, Gender::Unisex, Material::Cotton, Usage::Daily, 1999),
    ("Chaqueta Cuero", GarmentType::Jacket, Gender::Mens, Material::Leather, Usage::Daily, 14999),
    ("Falda Plisada", GarmentType::Skirt, Gender::Womens, Material::Polyester, Usage::Work, 4599),
    ("Sueter Lana", GarmentType::Sweater, Gender::Unisex, Material::Wool, Usage::Daily, 6999),
    ("Camisa Formal", GarmentType::Shirt, Gender::Mens, Material::Cotton, Usage::Work, 4999),
    ("Leggings Sport", GarmentType::Leggings, Gender::Womens, Material::Synthetic, Usage::Sport, 2999),
    ("Short Verano", GarmentType::Shorts, Gender::Kids, Material::Cotton, Usage::Daily, 2499),
];

const SIZES: &[Size] = &[Size::S, Size::M, Size::L];

const CUSTOMERS: &[(&str, &str)] = &[
    ("Ana", "Quispe"),
    ("Luis", "Mamani"),
    ("Carla", "Fernandez"),
    ("Jorge", "Rojas"),
    ("Maria", "Condori"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./boutique_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Boutique Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./boutique_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Boutique Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Branches
    let branches = [
        Branch {
            id: Uuid::new_v4().to_string(),
            name: "Sucursal Centro".to_string(),
            address: "Av. Principal 100".to_string(),
            phone: "555-0100".to_string(),
            deleted: false,
        },
        Branch {
            id: Uuid::new_v4().to_string(),
            name: "Sucursal Norte".to_string(),
            address: "Calle Comercio 42".to_string(),
            phone: "555-0200".to_string(),
            deleted: false,
        },
    ];
    for branch in &branches {
        db.branches().insert(branch).await?;
    }
    println!("✓ Seeded {} branches", branches.len());

    // Products: each garment in a few sizes
    let mut product_ids = Vec::new();
    for (idx, (name, garment_type, gender, material, usage, price_cents)) in
        GARMENTS.iter().enumerate()
    {
        for size in SIZES {
            let product = Product {
                id: Uuid::new_v4().to_string(),
                name: format!("{} {:?}", name, size),
                description: None,
                price_cents: *price_cents,
                brand: if idx % 2 == 0 { "Zara" } else { "H&M" }.to_string(),
                gender: *gender,
                garment_type: *garment_type,
                size: Some(*size),
                season: Some(Season::AllSeason),
                style: Some(Style::Casual),
                material: *material,
                usage: *usage,
            };
            db.products().insert(&product).await?;
            product_ids.push(product.id);
        }
    }
    println!("✓ Seeded {} products", product_ids.len());

    // Opening inventory at every branch
    let mut records = 0;
    for branch in &branches {
        for (idx, product_id) in product_ids.iter().enumerate() {
            let quantity = 5 + (idx as i64 % 10);
            db.inventory().create(&branch.id, product_id, quantity).await?;
            records += 1;
        }
    }
    println!("✓ Seeded {} inventory records", records);

    // Customers
    for (first, last) in CUSTOMERS {
        db.customers()
            .insert(&Customer {
                id: Uuid::new_v4().to_string(),
                person: Person {
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    phone: None,
                    email: Some(format!(
                        "{}.{}@example.com",
                        first.to_lowercase(),
                        last.to_lowercase()
                    )),
                },
            })
            .await?;
    }
    println!("✓ Seeded {} customers", CUSTOMERS.len());

    // Credit plans
    let plans = [
        CreditPlan {
            id: Uuid::new_v4().to_string(),
            name: "3 meses".to_string(),
            description: "Tres cuotas mensuales".to_string(),
            term_periods: 3,
            frequency: Frequency::Monthly,
            annual_rate_bps: 1000,
            active: true,
        },
        CreditPlan {
            id: Uuid::new_v4().to_string(),
            name: "6 meses".to_string(),
            description: "Seis cuotas mensuales".to_string(),
            term_periods: 6,
            frequency: Frequency::Monthly,
            annual_rate_bps: 1200,
            active: true,
        },
        CreditPlan {
            id: Uuid::new_v4().to_string(),
            name: "8 quincenas".to_string(),
            description: "Ocho cuotas quincenales".to_string(),
            term_periods: 8,
            frequency: Frequency::Biweekly,
            annual_rate_bps: 1400,
            active: true,
        },
    ];
    for plan in &plans {
        db.plans().insert(plan).await?;
    }
    println!("✓ Seeded {} credit plans", plans.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
