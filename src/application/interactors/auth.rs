use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::{GetSessionIdDTO, LoginDTO};
use crate::application::dto::id::IdDTO;
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::session::SessionWriter;
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct LoginInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    session_writer: Arc<dyn SessionWriter>,
    hasher: Arc<dyn CredentialsHasher>,
}

impl LoginInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        session_writer: Arc<dyn SessionWriter>,
        hasher: Arc<dyn CredentialsHasher>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            session_writer,
            hasher,
        }
    }

    pub async fn execute(&self, dto: LoginDTO) -> AppResult<GetSessionIdDTO> {
        let user = self.user_reader.find_by_email(&dto.email).await?.ok_or_else(|| {
            warn!("Login attempt with unknown email: {}", dto.email);
            AppError::InvalidCredentials
        })?;
        let is_valid = self.hasher.verify_password(&dto.password, &user.password).await?;
        if !is_valid {
            warn!("Invalid password for user: {}", user.username);
            return Err(AppError::InvalidCredentials);
        }
        let session = Session::new(user.id.clone());
        let session_id = self.session_writer.insert(session).await?;
        self.db_session.commit().await?;
        info!("User {} logged in", user.username);
        Ok(GetSessionIdDTO {
            session_id: session_id.value.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct LogoutInteractor {
    db_session: Arc<dyn DBSession>,
    session_writer: Arc<dyn SessionWriter>,
}

impl LogoutInteractor {
    pub fn new(db_session: Arc<dyn DBSession>, session_writer: Arc<dyn SessionWriter>) -> Self {
        Self {
            db_session,
            session_writer,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.session_writer.delete_by_user_id(&user_id).await?;
        self.db_session.commit().await?;
        info!("User {} logged out", user_id.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use mockall::mock;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::entities::session::Session;

    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
            async fn rollback(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub UserReaderMock {}

        #[async_trait]
        impl UserReader for UserReaderMock {
            async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>>;
            async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
            async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
            async fn is_user(&self, username: &str, email: &str) -> AppResult<bool>;
        }
    }

    mock! {
        pub SessionWriterMock {}

        #[async_trait]
        impl SessionWriter for SessionWriterMock {
            async fn insert(&self, session: Session) -> AppResult<Id<Session>>;
            async fn update_activity(&self, session_id: &Id<Session>, now: DateTime<Utc>) -> AppResult<()>;
            async fn delete(&self, session_id: &Id<Session>) -> AppResult<()>;
            async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()>;
        }
    }

    mock! {
        pub HasherMock {}

        #[async_trait]
        impl CredentialsHasher for HasherMock {
            async fn hash_password(&self, password: &str) -> AppResult<String>;
            async fn verify_password(&self, password: &str, hashed: &str) -> AppResult<bool>;
        }
    }

    const EMAIL: &str = "ada@example.com";
    const PASSWORD: &str = "Password123!";
    const HASH: &str = "$argon2id$v=19$m=16384,t=2,p=1$testsalt$testhash";

    #[fixture]
    fn login_dto() -> LoginDTO {
        LoginDTO {
            email: EMAIL.to_string(),
            password: PASSWORD.to_string(),
        }
    }

    fn build_user() -> User {
        User::new("ada".to_string(), EMAIL.to_string(), HASH.to_string())
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_success(login_dto: LoginDTO) {
        let mut db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let mut session_writer = MockSessionWriterMock::new();
        let mut hasher = MockHasherMock::new();

        user_reader.expect_find_by_email().returning(|_| Ok(Some(build_user())));
        hasher.expect_verify_password().returning(|_, _| Ok(true));
        session_writer.expect_insert().returning(|session| Ok(session.id));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let interactor = LoginInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(session_writer),
            Arc::new(hasher),
        );

        let result = interactor.execute(login_dto).await;
        assert!(!result.unwrap().session_id.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_unknown_email(login_dto: LoginDTO) {
        let db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let session_writer = MockSessionWriterMock::new();
        let hasher = MockHasherMock::new();

        user_reader.expect_find_by_email().returning(|_| Ok(None));

        let interactor = LoginInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(session_writer),
            Arc::new(hasher),
        );

        let result = interactor.execute(login_dto).await;
        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_invalid_password(login_dto: LoginDTO) {
        let db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let session_writer = MockSessionWriterMock::new();
        let mut hasher = MockHasherMock::new();

        user_reader.expect_find_by_email().returning(|_| Ok(Some(build_user())));
        hasher.expect_verify_password().returning(|_, _| Ok(false));

        let interactor = LoginInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(session_writer),
            Arc::new(hasher),
        );

        let result = interactor.execute(login_dto).await;
        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[rstest]
    #[tokio::test]
    async fn test_logout_invalid_id() {
        let db_session = MockDBSessionMock::new();
        let session_writer = MockSessionWriterMock::new();

        let interactor = LogoutInteractor::new(Arc::new(db_session), Arc::new(session_writer));
        let result = interactor.execute(IdDTO { id: "uuid".to_string() }).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidId(_)));
    }
}
