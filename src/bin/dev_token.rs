use chrono::Duration;

use marketplace_cart_api::{config::AppConfig, middleware::auth::issue_token};

/// Prints a bearer token for local testing: `dev-token <user-id> [role]`.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let mut args = std::env::args().skip(1);
    let user_id = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: dev-token <user-id> [role]"))?;
    let role = args.next().unwrap_or_else(|| "customer".to_string());

    let token = issue_token(&config.jwt_secret, &user_id, &role, Duration::hours(24))?;
    println!("{token}");
    Ok(())
}
