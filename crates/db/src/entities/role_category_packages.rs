//! `SeaORM` Entity for the role_category_packages join table.
//!
//! Each row entitles one role to one category package. At most one
//! package per (role, category) pair; enforced by the repository when
//! links are written.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "role_category_packages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub role_id: i32,
    pub category_package_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::roles::Entity",
        from = "Column::RoleId",
        to = "super::roles::Column::Id"
    )]
    Roles,
    #[sea_orm(
        belongs_to = "super::category_packages::Entity",
        from = "Column::CategoryPackageId",
        to = "super::category_packages::Column::Id"
    )]
    CategoryPackages,
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roles.def()
    }
}

impl Related<super::category_packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryPackages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
