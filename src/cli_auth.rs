use anyhow::Result;
use std::io::{self, Write};
use std::sync::Arc;

use crate::client::{
    ClientConfig, CredentialStore, JobBoardClient, StaticToken, StoredCredentials,
};
use crate::shared::models::{SignupRequest, UserRole};

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn prompt_server_url() -> Result<String> {
    let url = prompt("Server URL [http://localhost:8001]: ")?;
    if url.is_empty() {
        Ok("http://localhost:8001".to_string())
    } else {
        Ok(url)
    }
}

pub async fn validate_token(server_url: &str, token: &str) -> Result<Option<String>> {
    let client = JobBoardClient::new(
        ClientConfig::new(server_url),
        Arc::new(StaticToken::new(token)),
    )?;

    match client.me().await {
        Ok(profile) => Ok(Some(profile.email)),
        Err(_) => Ok(None),
    }
}

pub async fn auth_interactive() -> Result<()> {
    println!("JobBoard Authentication");
    println!();
    println!("Choose authentication method:");
    println!("1. Log in with an existing account");
    println!("2. Create a new account");
    println!("3. Store an API token directly");
    println!();

    let choice = prompt("Enter choice (1, 2 or 3): ")?;

    match choice.as_str() {
        "1" => auth_login().await?,
        "2" => auth_signup().await?,
        "3" => auth_token_interactive().await?,
        _ => {
            println!("Invalid choice. Please enter 1, 2 or 3.");
            return Ok(());
        }
    }

    Ok(())
}

pub async fn auth_login() -> Result<()> {
    println!("Account Login");
    let server_url = prompt_server_url()?;
    let email = prompt("Email: ")?;

    print!("Password: ");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;

    println!("Authenticating...");

    let client = JobBoardClient::new(ClientConfig::new(&server_url), Arc::new(StaticToken::none()))?;

    match client.login(&email, &password).await {
        Ok(auth) => {
            let store = CredentialStore::default_location()?;
            store.store(&server_url, &auth.access_token)?;
            println!();
            println!("✓ Authentication successful!");
            println!("   User: {} ({})", auth.email, auth.role);
            println!("   Server: {server_url}");
            println!();
            println!("You can now use 'jobboard' or 'jobboard connect' to connect to this server.");
        }
        Err(e) => {
            println!("✗ Authentication failed: {e}");
        }
    }

    Ok(())
}

pub async fn auth_signup() -> Result<()> {
    println!("Create Account");
    let server_url = prompt_server_url()?;
    let full_name = prompt("Full name: ")?;
    let email = prompt("Email: ")?;

    println!("Account type:");
    println!("1. Candidate (browse and apply to jobs)");
    println!("2. Employer (post jobs)");
    let role = match prompt("Enter choice (1 or 2): ")?.as_str() {
        "1" => UserRole::Candidate,
        "2" => UserRole::Employer,
        _ => {
            println!("Invalid choice. Please enter 1 or 2.");
            return Ok(());
        }
    };

    print!("Password: ");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;

    print!("Confirm password: ");
    io::stdout().flush()?;
    let confirm = rpassword::read_password()?;

    if password != confirm {
        println!("✗ Passwords do not match.");
        return Ok(());
    }

    println!("Creating account...");

    let client = JobBoardClient::new(ClientConfig::new(&server_url), Arc::new(StaticToken::none()))?;
    let request = SignupRequest {
        email,
        password,
        full_name,
        role,
    };

    match client.signup(&request).await {
        Ok(auth) => {
            let store = CredentialStore::default_location()?;
            store.store(&server_url, &auth.access_token)?;
            println!();
            println!("✓ Account created!");
            println!("   User: {} ({})", auth.email, auth.role);
            println!("   Server: {server_url}");
            println!();
            println!("You can now use 'jobboard' or 'jobboard connect' to connect to this server.");
        }
        Err(e) => {
            println!("✗ Signup failed: {e}");
        }
    }

    Ok(())
}

pub async fn auth_token_interactive() -> Result<()> {
    let server_url = prompt_server_url()?;

    print!("API Token: ");
    io::stdout().flush()?;
    let token = rpassword::read_password()?;

    println!("Validating token...");
    if let Some(user) = validate_token(&server_url, &token).await? {
        let store = CredentialStore::default_location()?;
        store.store(&server_url, &token)?;
        println!();
        println!("✓ Authentication successful!");
        println!("   User: {user}");
        println!("   Server: {server_url}");
        println!();
        println!("You can now use 'jobboard' or 'jobboard connect' to connect to this server.");
    } else {
        println!("✗ Invalid token or server unreachable");
    }
    Ok(())
}

pub async fn get_auth_status() -> Result<String> {
    // Check if auth config exists
    let store = CredentialStore::default_location()?;
    match store.load()? {
        Some(config) => {
            // Check server reachability using the health endpoint
            let client = JobBoardClient::new(
                ClientConfig::new(&config.server),
                Arc::new(StoredCredentials::new(store)),
            )?;
            let server_reachable = client.health().await.is_ok();

            if server_reachable {
                // Server is reachable, check if token is valid
                if let Some(user) = validate_token(&config.server, &config.token).await? {
                    Ok(format!(
                        "✓ Authenticated as: {user}\n   Server: {}",
                        config.server
                    ))
                } else {
                    Ok(format!(
                        "✗ Token is not valid\n   Server: {}",
                        config.server
                    ))
                }
            } else {
                Ok(format!(
                    "✗ Server is not reachable\n   Server: {}",
                    config.server
                ))
            }
        }
        None => Ok("✗ Not authenticated. Run 'jobboard auth' to authenticate.".to_string()),
    }
}

pub async fn show_auth_status() -> Result<()> {
    let status = get_auth_status().await?;
    println!();
    println!("Authentication Status:");
    println!("{status}");
    println!();
    Ok(())
}
