use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lightbnb_db::models::to_minor_units;
use lightbnb_db::{Limit, NewProperty, PgPool, PropertyFilter, PropertyRepo};

use super::print_json;

#[derive(Args, Debug)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    command: PropertiesCommand,
}

#[derive(Subcommand, Debug)]
enum PropertiesCommand {
    /// Search listings, cheapest first
    Search(SearchArgs),
    /// Show one listing with its average rating
    Show(ShowArgs),
    /// Add a listing
    Add(AddArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// City substring (case-sensitive)
    #[arg(long)]
    city: Option<String>,

    /// Only listings owned by this user id
    #[arg(long)]
    owner_id: Option<i32>,

    /// Minimum price per night, in dollars
    #[arg(long)]
    min_price: Option<f64>,

    /// Maximum price per night, in dollars (exclusive)
    #[arg(long)]
    max_price: Option<f64>,

    /// Minimum average rating
    #[arg(long)]
    min_rating: Option<f64>,

    /// Maximum listings to return (at most 100)
    #[arg(long, default_value = "10")]
    limit: u32,
}

impl From<&SearchArgs> for PropertyFilter {
    fn from(args: &SearchArgs) -> Self {
        Self {
            city: args.city.clone(),
            owner_id: args.owner_id,
            minimum_price_per_night: args.min_price,
            maximum_price_per_night: args.max_price,
            minimum_rating: args.min_rating,
        }
    }
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Property id
    id: i32,
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Owner's user id
    #[arg(long)]
    owner_id: i32,

    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long, default_value = "")]
    thumbnail_photo_url: String,

    #[arg(long, default_value = "")]
    cover_photo_url: String,

    /// Price per night, in dollars
    #[arg(long)]
    cost_per_night: f64,

    #[arg(long, default_value = "0")]
    parking_spaces: i32,

    #[arg(long, default_value = "0")]
    number_of_bathrooms: i32,

    #[arg(long, default_value = "0")]
    number_of_bedrooms: i32,

    #[arg(long)]
    country: String,

    #[arg(long)]
    street: String,

    #[arg(long)]
    city: String,

    #[arg(long)]
    province: String,

    #[arg(long)]
    post_code: String,

    /// List the property as inactive
    #[arg(long)]
    inactive: bool,
}

impl TryFrom<AddArgs> for NewProperty {
    type Error = anyhow::Error;

    fn try_from(args: AddArgs) -> Result<Self> {
        let cost_per_night = i32::try_from(to_minor_units(args.cost_per_night))
            .context("cost per night out of range")?;

        Ok(Self {
            owner_id: args.owner_id,
            title: args.title,
            description: args.description,
            thumbnail_photo_url: args.thumbnail_photo_url,
            cover_photo_url: args.cover_photo_url,
            cost_per_night,
            parking_spaces: args.parking_spaces,
            number_of_bathrooms: args.number_of_bathrooms,
            number_of_bedrooms: args.number_of_bedrooms,
            country: args.country,
            street: args.street,
            city: args.city,
            province: args.province,
            post_code: args.post_code,
            active: !args.inactive,
        })
    }
}

pub async fn run(pool: &PgPool, args: PropertiesArgs) -> Result<()> {
    let repo = PropertyRepo::new(pool);

    match args.command {
        PropertiesCommand::Search(search) => {
            let filter = PropertyFilter::from(&search);
            let listings = repo
                .search(&filter, Limit::new(search.limit))
                .await
                .context("property search failed")?;
            print_json(&listings)
        }
        PropertiesCommand::Show(show) => {
            let listing = repo.get(show.id).await?;
            print_json(&listing)
        }
        PropertiesCommand::Add(add) => {
            let property = repo
                .create(NewProperty::try_from(add)?)
                .await
                .context("failed to add property")?;
            print_json(&property)
        }
    }
}
