//! User registration and deregistration commands.

use washboard_ops::error::AppError;
use washboard_ops::services::{AuthService, Registration};

/// Register a new dashboard user.
pub async fn register(
    username: String,
    email: String,
    password: String,
    confirm_password: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_config, pool) = super::open_store().await?;
    let auth = AuthService::new(&pool);

    let form = Registration {
        username,
        password,
        confirm_password,
        email,
        registered_on: chrono::Local::now().date_naive(),
    };

    match auth.register(&form).await {
        Ok(user) => {
            println!(
                "Registration successful for {} ({})",
                user.username, user.email
            );
        }
        Err(e) => surface(AppError::from(e))?,
    }

    pool.close().await;
    Ok(())
}

/// Deregister a dashboard user by exact email match.
pub async fn deregister(email: String) -> Result<(), Box<dyn std::error::Error>> {
    let (_config, pool) = super::open_store().await?;
    let auth = AuthService::new(&pool);

    match auth.deregister(&email).await {
        Ok(user) => {
            println!(
                "Deregistered {} ({}), registered on {}",
                user.username, user.email, user.registered_on
            );
        }
        Err(e) => surface(AppError::from(e))?,
    }

    pool.close().await;
    Ok(())
}

/// Warning-class errors are shown and swallowed (the operation was
/// aborted with no partial write); internal faults propagate.
pub(super) fn surface(err: AppError) -> Result<(), Box<dyn std::error::Error>> {
    if err.is_warning() {
        tracing::warn!("{}", err.user_message());
        Ok(())
    } else {
        Err(err.into())
    }
}
