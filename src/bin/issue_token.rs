//! Prints a bearer token for the hospital food service.
//!
//! Usage: `issue-token <subject>`, reading `JWT_SECRET` and optionally
//! `TOKEN_TTL_HOURS` (default 24) from the environment or `.env`.

use std::env;
use std::process::ExitCode;

use dotenv::dotenv;
use hospital_food_service::services::auth_service;

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let Some(subject) = env::args().nth(1).filter(|s| !s.trim().is_empty()) else {
        eprintln!("usage: issue-token <subject>");
        return ExitCode::from(2);
    };

    let Some(secret) = env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()) else {
        log::error!("❌ JWT_SECRET must be set");
        return ExitCode::FAILURE;
    };

    let ttl_hours = match env::var("TOKEN_TTL_HOURS") {
        Ok(raw) => match raw.trim().parse::<i64>() {
            Ok(hours) if hours > 0 => hours,
            _ => {
                log::error!("❌ TOKEN_TTL_HOURS must be a positive number of hours, got '{}'", raw);
                return ExitCode::FAILURE;
            }
        },
        Err(_) => 24,
    };

    match auth_service::issue_token(&subject, &secret, chrono::Duration::hours(ttl_hours)) {
        Ok(token) => {
            println!("{}", token);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
