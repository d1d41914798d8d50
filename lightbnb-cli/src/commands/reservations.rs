use anyhow::{Context, Result};
use clap::Args;
use lightbnb_db::{Limit, PgPool, ReservationRepo};

use super::print_json;

#[derive(Args, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    guest_id: i32,

    /// Maximum reservations to return (at most 100)
    #[arg(long, default_value = "10")]
    limit: u32,
}

pub async fn run(pool: &PgPool, args: ReservationsArgs) -> Result<()> {
    let reservations = ReservationRepo::new(pool)
        .list_for_guest(args.guest_id, Limit::new(args.limit))
        .await
        .context("failed to list reservations")?;
    print_json(&reservations)
}
