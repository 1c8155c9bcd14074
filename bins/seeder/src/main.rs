//! Database seeder for Reimbra development and testing.
//!
//! Seeds roles, employees, categories, category packages, and role
//! entitlements for local development. Expense statuses are seeded by
//! the initial migration and are not touched here.
//!
//! Usage: cargo run --bin seeder

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use reimbra_db::ReferenceRepository;
use reimbra_db::entities::{categories, category_packages, employees, roles};
use reimbra_db::repositories::ReferenceError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = reimbra_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding roles...");
    let manager = seed_role(&db, "Manager", true).await;
    let engineer = seed_role(&db, "Engineer", true).await;
    let contractor = seed_role(&db, "Contractor", false).await;

    println!("Seeding employees...");
    seed_employee(&db, "Asha Rao", engineer).await;
    seed_employee(&db, "Jordan Blake", manager).await;
    seed_employee(&db, "Sam Ortiz", contractor).await;

    println!("Seeding categories...");
    let travel = seed_category(&db, "Travel", true).await;
    let meals = seed_category(&db, "Meals", true).await;
    let supplies = seed_category(&db, "Office Supplies", true).await;
    seed_category(&db, "Relocation", false).await;

    println!("Seeding category packages...");
    let travel_pkg = seed_package(&db, travel, 5000).await;
    let meals_pkg = seed_package(&db, meals, 800).await;
    let supplies_pkg = seed_package(&db, supplies, 300).await;

    println!("Seeding role entitlements...");
    let repo = ReferenceRepository::new(db.clone());
    seed_link(&repo, engineer, travel_pkg).await;
    seed_link(&repo, engineer, meals_pkg).await;
    seed_link(&repo, manager, travel_pkg).await;
    seed_link(&repo, manager, supplies_pkg).await;

    println!("Seeding complete!");
}

/// Seeds a role, returning its id. Idempotent by name.
async fn seed_role(db: &DatabaseConnection, name: &str, is_active: bool) -> i32 {
    if let Some(existing) = roles::Entity::find()
        .filter(roles::Column::Name.eq(name))
        .one(db)
        .await
        .ok()
        .flatten()
    {
        println!("  Role '{name}' already exists, skipping...");
        return existing.id;
    }

    let role = roles::ActiveModel {
        name: Set(name.to_string()),
        is_active: Set(is_active),
        ..Default::default()
    };

    let role = role.insert(db).await.expect("Failed to insert role");
    println!("  Created role: {name}");
    role.id
}

/// Seeds an employee. Idempotent by name.
async fn seed_employee(db: &DatabaseConnection, name: &str, role_id: i32) {
    if employees::Entity::find()
        .filter(employees::Column::Name.eq(name))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Employee '{name}' already exists, skipping...");
        return;
    }

    let employee = employees::ActiveModel {
        name: Set(name.to_string()),
        role_id: Set(role_id),
        ..Default::default()
    };

    if let Err(e) = employee.insert(db).await {
        eprintln!("Failed to insert employee '{name}': {e}");
    } else {
        println!("  Created employee: {name}");
    }
}

/// Seeds a category, returning its id. Idempotent by name.
async fn seed_category(db: &DatabaseConnection, name: &str, is_active: bool) -> i32 {
    if let Some(existing) = categories::Entity::find()
        .filter(categories::Column::Name.eq(name))
        .one(db)
        .await
        .ok()
        .flatten()
    {
        println!("  Category '{name}' already exists, skipping...");
        return existing.id;
    }

    let category = categories::ActiveModel {
        name: Set(name.to_string()),
        is_active: Set(is_active),
        ..Default::default()
    };

    let category = category.insert(db).await.expect("Failed to insert category");
    println!("  Created category: {name}");
    category.id
}

/// Seeds a category package, returning its id. Idempotent per category.
async fn seed_package(db: &DatabaseConnection, category_id: i32, expense_limit: i32) -> i32 {
    if let Some(existing) = category_packages::Entity::find()
        .filter(category_packages::Column::CategoryId.eq(category_id))
        .one(db)
        .await
        .ok()
        .flatten()
    {
        println!("  Package for category {category_id} already exists, skipping...");
        return existing.id;
    }

    let package = category_packages::ActiveModel {
        category_id: Set(category_id),
        expense_limit: Set(expense_limit),
        ..Default::default()
    };

    let package = package.insert(db).await.expect("Failed to insert package");
    println!("  Created package for category {category_id} (limit {expense_limit})");
    package.id
}

/// Entitles a role to a package through the repository so the duplicate
/// guard applies on re-runs.
async fn seed_link(repo: &ReferenceRepository, role_id: i32, package_id: i32) {
    match repo.add_role_category_package(role_id, package_id).await {
        Ok(_) => println!("  Linked role {role_id} to package {package_id}"),
        Err(ReferenceError::DuplicateEntitlement { .. }) => {
            println!("  Role {role_id} already entitled to package {package_id}, skipping...");
        }
        Err(e) => eprintln!("Failed to link role {role_id} to package {package_id}: {e}"),
    }
}
