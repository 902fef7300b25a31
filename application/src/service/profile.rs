use kernel::interface::database::{DependOnCollectionStore, ProfilesCollection};
use kernel::prelude::entity::{ProfilePicture, ProfileStatistics, UserId};
use kernel::KernelError;

use crate::state::{persist, DependOnLibraryState, Library};
use crate::transfer::{GetProfileDto, ProfileDto, UpdatePictureDto, UserDto};

fn profile_of(library: &Library, user_id: &UserId) -> ProfileDto {
    let profile_picture = library
        .profiles()
        .get(user_id)
        .and_then(|settings| settings.profile_picture().clone())
        .map(String::from);
    let user = library
        .session()
        .as_ref()
        .map(|session| session.user())
        .filter(|user| user.id() == user_id)
        .cloned()
        .map(UserDto::from);
    ProfileDto {
        user_id: (*user_id).into(),
        user,
        profile_picture,
        statistics: ProfileStatistics::collect(library.ledger(), user_id).into(),
        wishlist_count: library.wishlists().items(user_id).len(),
    }
}

#[async_trait::async_trait]
pub trait ProfileService: 'static + Sync + Send + DependOnLibraryState + DependOnCollectionStore {
    async fn update_picture(
        &self,
        dto: UpdatePictureDto,
    ) -> error_stack::Result<ProfileDto, KernelError> {
        let picture = ProfilePicture::parse(dto.picture)?;
        let user_id = UserId::new(dto.user_id);

        let mut library = self.library_state().lock().await;
        library.profiles_mut().set_picture(user_id, picture);
        persist::<ProfilesCollection, _>(self.collection_store(), library.profiles()).await;
        Ok(profile_of(&library, &user_id))
    }

    async fn get_profile(
        &self,
        dto: GetProfileDto,
    ) -> error_stack::Result<ProfileDto, KernelError> {
        let library = self.library_state().lock().await;
        Ok(profile_of(&library, &UserId::new(dto.user_id)))
    }
}

impl<T> ProfileService for T where T: DependOnLibraryState + DependOnCollectionStore {}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use time::Duration;

    use driver::clock::ManualClock;
    use driver::database::InMemoryStore;
    use kernel::KernelError;

    use crate::fixture::{TestModule, T0};
    use crate::service::{LoginService, ProfileService, RentalService, WishlistService};
    use crate::transfer::{
        CheckoutDto, GetProfileDto, LoginDto, ReturnDto, UpdatePictureDto, WishlistItemDto,
    };

    #[tokio::test]
    async fn picture_and_statistics() -> error_stack::Result<(), KernelError> {
        let clock = Arc::new(ManualClock::new(T0));
        let module = TestModule::new(clock.clone(), InMemoryStore::default()).await?;

        let first = module
            .checkout(CheckoutDto {
                item_id: 1,
                user_id: 1,
            })
            .await?;
        module
            .checkout(CheckoutDto {
                item_id: 2,
                user_id: 1,
            })
            .await?;
        clock.advance(Duration::hours(25));
        module
            .return_rental(ReturnDto {
                rental_id: first.id,
            })
            .await?;

        let profile = module.get_profile(GetProfileDto { user_id: 1 }).await?;
        assert_eq!(profile.user, None);
        assert_eq!(profile.wishlist_count, 0);

        module
            .login(LoginDto {
                login: "Bret".to_string(),
                password: "secret".to_string(),
            })
            .await?;
        for item_id in [2, 3] {
            module
                .add_to_wishlist(WishlistItemDto {
                    user_id: 1,
                    item_id,
                })
                .await?;
        }

        let profile = module.get_profile(GetProfileDto { user_id: 1 }).await?;
        let Some(user) = &profile.user else {
            panic!("logged in user should carry identity details");
        };
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.phone, "1-770-736-8031 x56442");
        assert_eq!(user.website, "hildegard.org");
        assert_eq!(user.company, "Romaguera-Crona");
        assert_eq!(user.address, "Kulas Light, Apt. 556, Gwenborough 92998-3874");
        assert_eq!(profile.wishlist_count, 2);
        assert_eq!(profile.profile_picture, None);
        assert_eq!(profile.statistics.total_rentals, 2);
        assert_eq!(profile.statistics.active_rentals, 1);
        // both rentals are one started hour overdue
        assert_eq!(profile.statistics.total_penalties, 10);
        assert_eq!(profile.statistics.library_points, 10);

        let picture = "data:image/png;base64,iVBORw0KGgo=".to_string();
        let updated = module
            .update_picture(UpdatePictureDto {
                user_id: 1,
                picture: picture.clone(),
            })
            .await?;
        assert_eq!(updated.profile_picture, Some(picture));

        // someone else's profile never shows the session user
        let other = module.get_profile(GetProfileDto { user_id: 2 }).await?;
        assert_eq!(other.user, None);

        let rejected = module
            .update_picture(UpdatePictureDto {
                user_id: 1,
                picture: "https://example.com/me.png".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(rejected.current_context(), &KernelError::InvalidPicture);
        Ok(())
    }
}
