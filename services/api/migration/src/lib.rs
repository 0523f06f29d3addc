pub use sea_orm_migration::prelude::*;

mod m20251019_000001_create_users;
mod m20251019_000002_create_planets;
mod m20251019_000003_create_characters;
mod m20251019_000004_create_favorite_planets;
mod m20251019_000005_create_favorite_characters;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_create_users::Migration),
            Box::new(m20251019_000002_create_planets::Migration),
            Box::new(m20251019_000003_create_characters::Migration),
            Box::new(m20251019_000004_create_favorite_planets::Migration),
            Box::new(m20251019_000005_create_favorite_characters::Migration),
        ]
    }
}
