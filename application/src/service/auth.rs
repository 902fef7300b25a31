use error_stack::Report;
use tracing::info;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DependOnCollectionStore, ProfilesCollection, SessionCollection};
use kernel::interface::query::{DependOnIdentitySource, IdentitySource};
use kernel::prelude::entity::Session;
use kernel::KernelError;

use crate::state::{persist, DependOnLibraryState};
use crate::transfer::{LoginDto, SessionDto};

#[async_trait::async_trait]
pub trait LoginService:
    'static
    + Sync
    + Send
    + DependOnLibraryState
    + DependOnCollectionStore
    + DependOnIdentitySource
    + DependOnClock
{
    /// Any user whose username or email equals `login` is accepted; the
    /// password is not checked.
    async fn login(&self, dto: LoginDto) -> error_stack::Result<SessionDto, KernelError> {
        if dto.login.is_empty() || dto.password.is_empty() {
            return Err(Report::new(KernelError::UnknownUser)
                .attach_printable("Username and password are required"));
        }
        let user = self
            .identity_source()
            .fetch_profiles()
            .await?
            .into_iter()
            .find(|user| user.is_identified_by(&dto.login))
            .ok_or_else(|| {
                Report::new(KernelError::UnknownUser)
                    .attach_printable(format!("No user matches `{}`", dto.login))
            })?;

        let session = Session::new(user, self.clock().now());
        let mut library = self.library_state().lock().await;
        let user_id = *session.user().id();
        if library.profiles_mut().ensure(user_id) {
            persist::<ProfilesCollection, _>(self.collection_store(), library.profiles()).await;
        }
        *library.session_mut() = Some(session.clone());
        persist::<SessionCollection, _>(self.collection_store(), library.session()).await;
        info!("User {} logged in", session.user().username().as_ref());
        Ok(session.into())
    }
}

impl<T> LoginService for T where
    T: DependOnLibraryState + DependOnCollectionStore + DependOnIdentitySource + DependOnClock
{
}

#[async_trait::async_trait]
pub trait SessionService: 'static + Sync + Send + DependOnLibraryState + DependOnCollectionStore {
    async fn logout(&self) -> error_stack::Result<(), KernelError> {
        let mut library = self.library_state().lock().await;
        if library.session_mut().take().is_some() {
            persist::<SessionCollection, _>(self.collection_store(), library.session()).await;
        }
        Ok(())
    }

    async fn current_session(&self) -> error_stack::Result<Option<SessionDto>, KernelError> {
        let library = self.library_state().lock().await;
        Ok(library.session().clone().map(SessionDto::from))
    }
}

impl<T> SessionService for T where T: DependOnLibraryState + DependOnCollectionStore {}
