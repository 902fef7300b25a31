use kernel::prelude::entity::ProfileStatistics;

use crate::transfer::UserDto;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProfileStatisticsDto {
    pub total_rentals: usize,
    pub active_rentals: usize,
    pub total_penalties: i64,
    pub library_points: i64,
}

impl From<ProfileStatistics> for ProfileStatisticsDto {
    fn from(value: ProfileStatistics) -> Self {
        Self {
            total_rentals: *value.total_rentals(),
            active_rentals: *value.active_rentals(),
            total_penalties: (*value.total_penalties()).into(),
            library_points: *value.library_points(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProfileDto {
    pub user_id: i64,
    /// Identity and contact details, present while this user is logged in.
    pub user: Option<UserDto>,
    pub profile_picture: Option<String>,
    pub statistics: ProfileStatisticsDto,
    pub wishlist_count: usize,
}

pub struct GetProfileDto {
    pub user_id: i64,
}

pub struct UpdatePictureDto {
    pub user_id: i64,
    /// `data:image/...` URL.
    pub picture: String,
}
