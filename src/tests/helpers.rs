#![cfg(test)]

use sqlx::PgPool;
use uuid::Uuid;

use crate::infra::state::AppState;

pub fn unique_credentials() -> (String, String) {
    let id = Uuid::now_v7().as_simple().to_string();
    let username = format!("t_{}", &id[..16]);
    let email = format!("{}@test.example", &id[..16]);

    (username, email)
}

pub async fn delete_user(pool: &PgPool, user_id: Uuid) {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}

pub async fn hash_password(state: &AppState, password: &str) -> String {
    state.hasher.hash_password(password).await.expect("hash password")
}

pub async fn insert_user(pool: &PgPool, username: &str, email: &str, hashed_password: &str) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (id, username, email, password) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(id)
    .bind(username)
    .bind(email)
    .bind(hashed_password)
    .fetch_one(pool)
    .await
    .expect("insert user")
}

pub async fn insert_default_profile(pool: &PgPool, user_id: Uuid) {
    sqlx::query("INSERT INTO profiles (user_id) VALUES ($1)")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("insert profile");
}

pub async fn insert_session(pool: &PgPool, user_id: Uuid) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query_scalar::<_, Uuid>("INSERT INTO sessions (id, user_id) VALUES ($1, $2) RETURNING id")
        .bind(id)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("insert session")
}

pub fn session_cookie(session_id: Uuid, cookie_name: &str) -> String {
    format!("{}={}", cookie_name, session_id)
}

pub async fn profile_column<T>(pool: &PgPool, user_id: Uuid, column: &str) -> T
where
    T: for<'r> sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres> + Send + Unpin,
{
    sqlx::query_scalar::<_, T>(&format!("SELECT {column} FROM profiles WHERE user_id = $1"))
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("read profile column")
}
