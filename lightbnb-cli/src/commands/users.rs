use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand};
use lightbnb_db::{NewUser, PgPool, UserRepo};

use super::print_json;

#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    /// Show a user by email or id
    Show(ShowArgs),
    /// Add a user
    Add(AddArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ShowArgs {
    /// Exact email address
    #[arg(long)]
    email: Option<String>,

    /// User id
    #[arg(long)]
    id: Option<i32>,
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Email address
    #[arg(long)]
    email: String,

    /// Password (stored as given; pass a hash)
    #[arg(long)]
    password: String,
}

pub async fn run(pool: &PgPool, args: UserArgs) -> Result<()> {
    let repo = UserRepo::new(pool);

    match args.command {
        UserCommand::Show(show) => {
            // clap guarantees exactly one of --email / --id
            let (user, key) = match show.id {
                Some(id) => (repo.find_by_id(id).await?, id.to_string()),
                None => {
                    let email = show.email.unwrap_or_default();
                    (repo.find_by_email(&email).await?, email)
                }
            };
            let user = user.ok_or_else(|| anyhow!("no user matching '{}'", key))?;
            print_json(&user)
        }
        UserCommand::Add(add) => {
            let new_user = NewUser::new(&add.name, &add.email, &add.password)
                .context("invalid user")?;
            let user = repo.create(new_user).await.context("failed to add user")?;
            print_json(&user)
        }
    }
}
