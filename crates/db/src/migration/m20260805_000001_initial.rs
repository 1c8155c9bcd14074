//! Initial database migration.
//!
//! Creates the reference-data tables, the expenses table, and seeds the
//! three fixed expense statuses.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: REFERENCE DATA
        // ============================================================
        db.execute_unprepared(ROLES_SQL).await?;
        db.execute_unprepared(EMPLOYEES_SQL).await?;
        db.execute_unprepared(CATEGORIES_SQL).await?;
        db.execute_unprepared(EXPENSE_STATUSES_SQL).await?;

        // ============================================================
        // PART 2: BUDGET PACKAGES & ENTITLEMENTS
        // ============================================================
        db.execute_unprepared(CATEGORY_PACKAGES_SQL).await?;
        db.execute_unprepared(ROLE_CATEGORY_PACKAGES_SQL).await?;

        // ============================================================
        // PART 3: EXPENSES
        // ============================================================
        db.execute_unprepared(EXPENSES_SQL).await?;

        // ============================================================
        // PART 4: SEED DATA
        // ============================================================
        db.execute_unprepared(SEED_STATUSES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ROLES_SQL: &str = r"
CREATE TABLE roles (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT TRUE
);
";

const EMPLOYEES_SQL: &str = r"
CREATE TABLE employees (
    id SERIAL PRIMARY KEY,
    name VARCHAR(200) NOT NULL,
    role_id INTEGER NOT NULL REFERENCES roles(id)
);

CREATE INDEX idx_employees_role ON employees (role_id);
";

const CATEGORIES_SQL: &str = r"
CREATE TABLE categories (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL UNIQUE,
    is_active BOOLEAN NOT NULL DEFAULT TRUE
);
";

const EXPENSE_STATUSES_SQL: &str = r"
CREATE TABLE expense_statuses (
    id SERIAL PRIMARY KEY,
    name VARCHAR(50) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT TRUE
);
";

const CATEGORY_PACKAGES_SQL: &str = r"
CREATE TABLE category_packages (
    id SERIAL PRIMARY KEY,
    category_id INTEGER NOT NULL REFERENCES categories(id),
    expense_limit INTEGER NOT NULL CHECK (expense_limit >= 0)
);

CREATE INDEX idx_category_packages_category ON category_packages (category_id);
";

const ROLE_CATEGORY_PACKAGES_SQL: &str = r"
CREATE TABLE role_category_packages (
    id SERIAL PRIMARY KEY,
    role_id INTEGER NOT NULL REFERENCES roles(id),
    category_package_id INTEGER NOT NULL REFERENCES category_packages(id),
    UNIQUE (role_id, category_package_id)
);

CREATE INDEX idx_role_category_packages_role ON role_category_packages (role_id);
";

const EXPENSES_SQL: &str = r"
CREATE TABLE expenses (
    id SERIAL PRIMARY KEY,
    employee_id INTEGER NOT NULL REFERENCES employees(id),
    category_id INTEGER NOT NULL REFERENCES categories(id),
    amount INTEGER NOT NULL CHECK (amount > 0),
    status_id INTEGER NOT NULL REFERENCES expense_statuses(id),
    submit_date TIMESTAMP NOT NULL,
    approval_date TIMESTAMP
);

CREATE INDEX idx_expenses_employee_submit ON expenses (employee_id, submit_date);
CREATE INDEX idx_expenses_status_submit ON expenses (status_id, submit_date DESC);
";

// Fixed status ids: Pending=1, Approved=2, Rejected=3.
const SEED_STATUSES_SQL: &str = r"
INSERT INTO expense_statuses (id, name, is_active) VALUES
    (1, 'Pending', TRUE),
    (2, 'Approved', TRUE),
    (3, 'Rejected', TRUE);

SELECT setval(pg_get_serial_sequence('expense_statuses', 'id'), 3, true);
";

const DROP_ALL_SQL: &str = r"
-- Drop tables (reverse order of creation)
DROP TABLE IF EXISTS expenses CASCADE;
DROP TABLE IF EXISTS role_category_packages CASCADE;
DROP TABLE IF EXISTS category_packages CASCADE;
DROP TABLE IF EXISTS expense_statuses CASCADE;
DROP TABLE IF EXISTS categories CASCADE;
DROP TABLE IF EXISTS employees CASCADE;
DROP TABLE IF EXISTS roles CASCADE;
";
