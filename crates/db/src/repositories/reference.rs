//! Reference-data repository.
//!
//! Keyed lookups and listings for roles, employees, categories,
//! statuses, category packages, and role entitlements. The only write
//! path is entitlement creation, which enforces at most one package per
//! (role, category) pair.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::entities::{
    categories, category_packages, employees, expense_statuses, role_category_packages, roles,
};

/// Error types for reference-data operations.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// Role not found.
    #[error("Role not found: {0}")]
    RoleNotFound(i32),

    /// Category package not found.
    #[error("Category package not found: {0}")]
    PackageNotFound(i32),

    /// The role already holds a package for this category.
    #[error("Role {role_id} already has a package for category {category_id}")]
    DuplicateEntitlement {
        /// Role id.
        role_id: i32,
        /// Category id covered by the conflicting packages.
        category_id: i32,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Repository for reference-data lookups.
#[derive(Debug, Clone)]
pub struct ReferenceRepository {
    db: DatabaseConnection,
}

impl ReferenceRepository {
    /// Creates a new reference-data repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all roles.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_roles(&self) -> Result<Vec<roles::Model>, ReferenceError> {
        Ok(roles::Entity::find().all(&self.db).await?)
    }

    /// Lists all employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_employees(&self) -> Result<Vec<employees::Model>, ReferenceError> {
        Ok(employees::Entity::find().all(&self.db).await?)
    }

    /// Lists all expense categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_categories(&self) -> Result<Vec<categories::Model>, ReferenceError> {
        Ok(categories::Entity::find().all(&self.db).await?)
    }

    /// Lists all expense statuses.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_expense_statuses(
        &self,
    ) -> Result<Vec<expense_statuses::Model>, ReferenceError> {
        Ok(expense_statuses::Entity::find().all(&self.db).await?)
    }

    /// Lists all category packages.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_category_packages(
        &self,
    ) -> Result<Vec<category_packages::Model>, ReferenceError> {
        Ok(category_packages::Entity::find().all(&self.db).await?)
    }

    /// Lists all role-to-package entitlements.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_role_category_packages(
        &self,
    ) -> Result<Vec<role_category_packages::Model>, ReferenceError> {
        Ok(role_category_packages::Entity::find().all(&self.db).await?)
    }

    /// Entitles a role to a category package.
    ///
    /// A role may hold at most one package per category, so the write is
    /// refused when any of the role's existing packages already covers
    /// the new package's category.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Role or package is not found
    /// - The role already has a package for the same category
    /// - Database operation fails
    pub async fn add_role_category_package(
        &self,
        role_id: i32,
        category_package_id: i32,
    ) -> Result<role_category_packages::Model, ReferenceError> {
        roles::Entity::find_by_id(role_id)
            .one(&self.db)
            .await?
            .ok_or(ReferenceError::RoleNotFound(role_id))?;

        let package = category_packages::Entity::find_by_id(category_package_id)
            .one(&self.db)
            .await?
            .ok_or(ReferenceError::PackageNotFound(category_package_id))?;

        let existing_links = role_category_packages::Entity::find()
            .filter(role_category_packages::Column::RoleId.eq(role_id))
            .all(&self.db)
            .await?;

        if !existing_links.is_empty() {
            let linked_package_ids: Vec<i32> = existing_links
                .iter()
                .map(|link| link.category_package_id)
                .collect();

            let conflict = category_packages::Entity::find()
                .filter(category_packages::Column::Id.is_in(linked_package_ids))
                .filter(category_packages::Column::CategoryId.eq(package.category_id))
                .one(&self.db)
                .await?;

            if conflict.is_some() {
                return Err(ReferenceError::DuplicateEntitlement {
                    role_id,
                    category_id: package.category_id,
                });
            }
        }

        let link = role_category_packages::ActiveModel {
            role_id: Set(role_id),
            category_package_id: Set(category_package_id),
            ..Default::default()
        };

        let link = link.insert(&self.db).await?;
        tracing::debug!(
            role_id,
            category_package_id,
            link_id = link.id,
            "entitlement created"
        );
        Ok(link)
    }
}
