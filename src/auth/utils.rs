use actix_web::web;
use anyhow::{bail, Context};
use blake2::{Blake2b, Digest};
use chrono::Utc;
use diesel::prelude::*;
use rand::{distributions::Alphanumeric, Rng};

use crate::{
    models::{user_logins::UserLoginData, users::UserData},
    DbPool,
};

const SALT_LEN: usize = 16;

/// Stored form is `salt$hexdigest` with the digest taken over salt + password.
pub fn hash_password(password: &str) -> String {
    let salt: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SALT_LEN)
        .map(char::from)
        .collect();
    let digest = format!(
        "{:x}",
        Blake2b::digest(format!("{}{}", salt, password).as_bytes())
    );
    format!("{}${}", salt, digest)
}

pub fn verify_password(stored: &str, password: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, digest)) => {
            let computed = format!(
                "{:x}",
                Blake2b::digest(format!("{}{}", salt, password).as_bytes())
            );
            computed == digest
        }
        None => false,
    }
}

pub fn make_login_token(email: &str) -> String {
    // Random nonce keeps concurrent logins for one email from colliding
    // on the token primary key.
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SALT_LEN)
        .map(char::from)
        .collect();
    let seed = format!("{}{}{}", email, Utc::now().timestamp_nanos(), nonce);
    format!("{:x}", Blake2b::digest(seed.as_bytes()))
}

/// Resolves a session token to its user row. Fails on unknown or expired tokens.
pub async fn get_user_from_token(
    token: String,
    pool: &web::Data<DbPool>,
) -> anyhow::Result<UserData> {
    use crate::schema::{user_logins, users};
    const MAX_LOGIN_TIME_SECS: i64 = 3600;

    let conn = crate::database::get_db_conn(pool)?;
    let data = web::block(move || {
        user_logins::table
            .filter(user_logins::token.eq(token))
            .order(user_logins::login_time.desc())
            .limit(1)
            .get_result::<UserLoginData>(&conn)
            .optional()
    })
    .await
    .context("Database error")?;

    let data = match data {
        Some(data) => data,
        None => bail!("Not logged in"),
    };

    let time_diff = Utc::now()
        .naive_utc()
        .signed_duration_since(data.login_time);
    if time_diff.num_seconds() > MAX_LOGIN_TIME_SECS {
        bail!("Login expired");
    }

    let conn = crate::database::get_db_conn(pool)?;
    let user = web::block(move || {
        users::table
            .filter(users::id.eq(data.user_id))
            .get_result::<UserData>(&conn)
    })
    .await
    .context("Database error")?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let stored = hash_password("hunter2");
        assert!(verify_password(&stored, "hunter2"));
    }

    #[test]
    fn wrong_password_fails() {
        let stored = hash_password("hunter2");
        assert!(!verify_password(&stored, "hunter3"));
    }

    #[test]
    fn malformed_stored_value_fails() {
        assert!(!verify_password("no-separator-here", "hunter2"));
        assert!(!verify_password("", "hunter2"));
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same");
        let b = hash_password("same");
        assert_ne!(a, b);
        assert!(verify_password(&a, "same"));
        assert!(verify_password(&b, "same"));
    }

    #[test]
    fn tokens_for_same_email_differ() {
        let a = make_login_token("a@x.com");
        let b = make_login_token("a@x.com");
        assert_ne!(a, b);
    }

    #[test]
    fn stored_form_is_salt_then_digest() {
        let stored = hash_password("pw");
        let (salt, digest) = stored.split_once('$').unwrap();
        assert_eq!(salt.len(), SALT_LEN);
        // Blake2b-512 hex
        assert_eq!(digest.len(), 128);
    }
}
