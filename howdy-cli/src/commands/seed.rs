//! User seeding command
//!
//! Creates every requested user inside one transaction and commits once.
//! Any failure rolls the whole batch back; the store never sees a partial
//! run.

use anyhow::{bail, Context, Result};
use clap::Parser;

use howdy_server::db::{connect, TxWriter, UserRepo, UserTx};
use howdy_server::models::UserInfo;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// User names to create, one record per name
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the requested users in a single transaction
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    // Load database URL from args or env
    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL env var")?;

    let pool = connect(&database_url)
        .await
        .context("Failed to open the user store")?;

    // Run the batch, then release the store handle on every exit path
    let result = match UserRepo::new(&pool).begin().await {
        Ok(mut tx) => seed_users(&mut tx, &args.names).await,
        Err(err) => Err(err).context("Failed to begin transaction"),
    };
    pool.close().await;
    result?;

    println!("created {} users", args.names.len());
    Ok(())
}

/// Run the whole batch inside one transaction: every name inserts, then a
/// single commit. The first failure rolls everything back; the error keeps
/// the failing user and its cause even when the rollback itself fails.
async fn seed_users<S: TxWriter>(tx: &mut UserTx<S>, names: &[String]) -> Result<()> {
    for name in names {
        let user = UserInfo::new(name.as_str());
        if let Err(err) = tx.create_user(&user).await {
            tx.rollback().await.context(format!(
                "Rollback after create user '{}' failed: {}",
                name, err
            ))?;
            bail!("Create user '{}' failed: {}", name, err);
        }
        tracing::debug!("created user {}", name);
    }

    tx.commit().await.context("Failed to commit")?;
    tracing::info!("created {} users", names.len());
    Ok(())
}
