use anyhow::Context;
use clap::Parser;
use tracing::{error, info, Instrument};
use user_registry::{setup_tracing, ClientConfig, Empty, Name, RpcClient, User};

/// Adds Bob, lists every user, then looks Bob up again. Any failure aborts
/// the remaining calls.
async fn run(target: &str) -> anyhow::Result<()> {
    let mut client = RpcClient::connect(target)
        .await
        .with_context(|| format!("failed to connect to {}", target))?;

    let user = User::new("Bob", 24);

    client
        .add_user(user.clone())
        .instrument(tracing::info_span!("add_user"))
        .await
        .context("failed to add user")?;
    info!(user_name = %user.name, "User added");

    let users = client
        .get_users(Empty {})
        .await
        .context("failed to get users")?;
    info!(user_count = users.users.len(), "users:");
    for u in &users.users {
        println!("{:?}", u);
    }

    let found = client
        .get_user(Name::new(user.name.as_str()))
        .await
        .context("failed to get user")?;
    info!(user_name = %found.name, age = found.age, "User found");

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = ClientConfig::parse();
    if let Err(e) = run(&config.target).await {
        error!("Client failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}
