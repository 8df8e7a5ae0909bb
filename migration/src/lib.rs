pub use sea_orm_migration::prelude::*;

mod m20260831_000001_create_seat_table;
mod m20260831_000002_create_special_election_table;
mod m20260831_000003_create_special_election_cooldown_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260831_000001_create_seat_table::Migration),
            Box::new(m20260831_000002_create_special_election_table::Migration),
            Box::new(m20260831_000003_create_special_election_cooldown_table::Migration),
        ]
    }
}
