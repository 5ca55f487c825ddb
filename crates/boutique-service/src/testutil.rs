//! Shared fixtures for service tests: a database seeded with a branch,
//! products with stock, a customer, and two credit plans.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use boutique_core::{
    Branch, CreditPlan, Customer, Frequency, GarmentType, Gender, Material, Person, Product,
    Season, Size, Style, Usage,
};
use boutique_db::{Database, DbConfig};

/// Builds a fresh in-memory database with the standard fixtures:
///
/// * branch `b1`
/// * products `p1` ($29.99, 10 in stock), `p2` ($59.99, 5), `p3` ($30.00, 50)
/// * customer `c1`
/// * plans `plan3` (3 monthly, 10%) and `plan6` (6 monthly, 12%)
pub async fn test_db() -> Database {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    seed_fixtures(&db).await;
    db
}

/// Same fixtures on a file-backed database with a real multi-connection
/// pool, for tests that need genuinely concurrent transactions (in-memory
/// SQLite is capped at one connection).
///
/// Callers remove the returned path (and its `-wal`/`-shm` siblings) when
/// done.
pub async fn test_db_file() -> (Database, PathBuf) {
    static NEXT: AtomicU32 = AtomicU32::new(0);
    let path = std::env::temp_dir().join(format!(
        "boutique-test-{}-{}.db",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::Relaxed),
    ));

    let db = Database::new(DbConfig::new(&path).max_connections(5))
        .await
        .unwrap();
    seed_fixtures(&db).await;
    (db, path)
}

/// Removes a `test_db_file` database and its WAL sidecars.
pub fn remove_db_file(path: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
    }
}

async fn seed_fixtures(db: &Database) {
    db.branches()
        .insert(&Branch {
            id: "b1".to_string(),
            name: "Sucursal Centro".to_string(),
            address: "Av. Principal 100".to_string(),
            phone: "555-0100".to_string(),
            deleted: false,
        })
        .await
        .unwrap();

    for (id, name, price_cents, stock) in [
        ("p1", "Vestido Rojo M", 2999_i64, 10_i64),
        ("p2", "Chaqueta Cuero L", 5999, 5),
        ("p3", "Polera Basica S", 3000, 50),
    ] {
        db.products()
            .insert(&Product {
                id: id.to_string(),
                name: name.to_string(),
                description: None,
                price_cents,
                brand: "Zara".to_string(),
                gender: Gender::Womens,
                garment_type: GarmentType::Dress,
                size: Some(Size::M),
                season: Some(Season::AllSeason),
                style: Some(Style::Casual),
                material: Material::Cotton,
                usage: Usage::Daily,
            })
            .await
            .unwrap();
        db.inventory().create("b1", id, stock).await.unwrap();
    }

    db.customers()
        .insert(&Customer {
            id: "c1".to_string(),
            person: Person {
                first_name: "Ana".to_string(),
                last_name: "Quispe".to_string(),
                phone: None,
                email: None,
            },
        })
        .await
        .unwrap();

    db.plans()
        .insert(&CreditPlan {
            id: "plan3".to_string(),
            name: "3 meses".to_string(),
            description: "Tres cuotas mensuales".to_string(),
            term_periods: 3,
            frequency: Frequency::Monthly,
            annual_rate_bps: 1000,
            active: true,
        })
        .await
        .unwrap();

    db.plans()
        .insert(&CreditPlan {
            id: "plan6".to_string(),
            name: "6 meses".to_string(),
            description: "Seis cuotas mensuales".to_string(),
            term_periods: 6,
            frequency: Frequency::Monthly,
            annual_rate_bps: 1200,
            active: true,
        })
        .await
        .unwrap();
}

/// Current stock for a (branch, product) pair.
pub async fn stock(db: &Database, branch_id: &str, product_id: &str) -> i64 {
    db.inventory()
        .get(branch_id, product_id)
        .await
        .unwrap()
        .unwrap()
        .quantity
}
