//! Instagram Access Token Check Script
//!
//! This script checks the configured Instagram Graph API access token and prints the
//! account it belongs to. Credentials come from the same `IG_*` environment variables
//! as the server; if `IG_ACCESS_TOKEN` is unset the token is read from stdin.

use ig_autopost::{InstagramClient, InstagramConfig};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    println!("📸 Instagram Access Token Check");
    println!("===============================");

    let mut config = InstagramConfig::from_env();

    if config.access_token.is_empty() {
        print!("🔑 Enter your Instagram Access Token: ");
        io::stdout().flush()?;
        let mut access_token = String::new();
        io::stdin().read_line(&mut access_token)?;
        config.access_token = access_token.trim().to_string();

        if config.access_token.is_empty() {
            println!("❌ Access token cannot be empty!");
            return Err("Access token is required".into());
        }
    }

    let missing = config.missing_variables();
    if !missing.is_empty() {
        println!("⚠️  Missing environment variables: {}", missing.join(", "));
    }

    let client = InstagramClient::new(config)?;

    println!("\n🔍 Validating access token...");
    if !client.validate_access_token().await {
        println!("❌ Access token was rejected or the Graph API could not be reached.");
        return Err("Access token validation failed".into());
    }
    println!("✅ Access token is valid.");

    if client.config().user_id.is_empty() {
        println!("ℹ️  IG_USER_ID is not set, skipping account lookup.");
        return Ok(());
    }

    println!("\n👤 Fetching account info...");
    match client.get_user_info().await {
        Ok(info) => {
            println!("🆔 Id: {}", info.id);
            println!(
                "📛 Username: {}",
                info.username.as_deref().unwrap_or("<unknown>")
            );
            println!(
                "🏷️  Account type: {}",
                info.account_type.as_deref().unwrap_or("<unknown>")
            );
            match info.media_count {
                Some(count) => println!("🖼️  Media count: {}", count),
                None => println!("🖼️  Media count: <unknown>"),
            }
        }
        Err(e) => {
            println!("\n💥 {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
