use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::application::app_error::AppResult;
use crate::application::dto::session::{GetSessionStatusDTO, SessionDTO, SessionValidationResult};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::session::{SessionReader, SessionWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;

/// Validates the cookie session on every authenticated request: unknown ids
/// are invalid, sessions past their max lifetime or idle timeout are expired
/// and removed, anything else refreshes the activity timestamp.
#[derive(Clone)]
pub struct ValidateSessionInteractor {
    db_session: Arc<dyn DBSession>,
    session_reader: Arc<dyn SessionReader>,
    session_writer: Arc<dyn SessionWriter>,
}

impl ValidateSessionInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        session_reader: Arc<dyn SessionReader>,
        session_writer: Arc<dyn SessionWriter>,
    ) -> Self {
        Self {
            db_session,
            session_reader,
            session_writer,
        }
    }

    pub async fn execute(&self, dto: SessionDTO) -> AppResult<GetSessionStatusDTO> {
        let session_id: Id<Session> = dto.id.try_into()?;
        let session = match self.session_reader.find_by_id(&session_id).await? {
            Some(s) => s,
            None => {
                return Ok(GetSessionStatusDTO {
                    status: SessionValidationResult::Invalid,
                });
            }
        };

        let now = Utc::now();
        let expired = now - session.created_at > Duration::seconds(dto.max_lifetime)
            || now - session.last_activity > Duration::seconds(dto.idle_timeout);
        if expired {
            self.session_writer.delete(&session_id).await?;
            self.db_session.commit().await?;
            return Ok(GetSessionStatusDTO {
                status: SessionValidationResult::Expired,
            });
        }

        self.session_writer.update_activity(&session_id, now).await?;
        self.db_session.commit().await?;
        Ok(GetSessionStatusDTO {
            status: SessionValidationResult::Valid(session.user_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use mockall::mock;
    use rstest::rstest;

    use super::*;
    use crate::application::app_error::AppResult;
    use crate::domain::entities::user::User;

    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
            async fn rollback(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub SessionReaderMock {}

        #[async_trait]
        impl SessionReader for SessionReaderMock {
            async fn find_by_id(&self, session_id: &Id<Session>) -> AppResult<Option<Session>>;
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

    fn dto_for(session_id: &Id<Session>) -> SessionDTO {
        SessionDTO {
            id: session_id.value.to_string(),
            max_lifetime: 86_400,
            idle_timeout: 3_600,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_valid_session_refreshes_activity() {
        let session = Session::new(Id::generate());
        let session_id = session.id.clone();

        let mut db_session = MockDBSessionMock::new();
        let mut reader = MockSessionReaderMock::new();
        let mut writer = MockSessionWriterMock::new();

        let found = session.clone();
        reader.expect_find_by_id().returning(move |_| Ok(Some(found.clone())));
        writer.expect_update_activity().times(1).returning(|_, _| Ok(()));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let interactor =
            ValidateSessionInteractor::new(Arc::new(db_session), Arc::new(reader), Arc::new(writer));
        let result = interactor.execute(dto_for(&session_id)).await.unwrap();
        assert!(matches!(result.status, SessionValidationResult::Valid(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_unknown_session_is_invalid() {
        let db_session = MockDBSessionMock::new();
        let mut reader = MockSessionReaderMock::new();
        let writer = MockSessionWriterMock::new();

        reader.expect_find_by_id().returning(|_| Ok(None));

        let interactor =
            ValidateSessionInteractor::new(Arc::new(db_session), Arc::new(reader), Arc::new(writer));
        let result = interactor.execute(dto_for(&Id::generate())).await.unwrap();
        assert!(matches!(result.status, SessionValidationResult::Invalid));
    }

    #[rstest]
    #[tokio::test]
    async fn test_idle_session_expires_and_is_deleted() {
        let mut session = Session::new(Id::generate());
        session.last_activity = Utc::now() - Duration::hours(2);
        let session_id = session.id.clone();

        let mut db_session = MockDBSessionMock::new();
        let mut reader = MockSessionReaderMock::new();
        let mut writer = MockSessionWriterMock::new();

        let found = session.clone();
        reader.expect_find_by_id().returning(move |_| Ok(Some(found.clone())));
        writer.expect_delete().times(1).returning(|_| Ok(()));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let interactor =
            ValidateSessionInteractor::new(Arc::new(db_session), Arc::new(reader), Arc::new(writer));
        let result = interactor.execute(dto_for(&session_id)).await.unwrap();
        assert!(matches!(result.status, SessionValidationResult::Expired));
    }
}
