use crate::entity::UserProfile;
use crate::KernelError;

#[async_trait::async_trait]
pub trait IdentitySource: 'static + Sync + Send {
    async fn fetch_profiles(&self) -> error_stack::Result<Vec<UserProfile>, KernelError>;
}

pub trait DependOnIdentitySource: 'static + Sync + Send {
    type IdentitySource: IdentitySource;
    fn identity_source(&self) -> &Self::IdentitySource;
}
