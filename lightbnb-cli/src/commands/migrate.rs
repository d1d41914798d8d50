use anyhow::{Context, Result};
use lightbnb_db::db::migrations;
use lightbnb_db::PgPool;

pub async fn run(pool: &PgPool) -> Result<()> {
    migrations::run(pool).await.context("migrations failed")?;
    println!("schema up to date");
    Ok(())
}
