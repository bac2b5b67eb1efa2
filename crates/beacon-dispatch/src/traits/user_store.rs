//! User store capability trait.

use async_trait::async_trait;

use beacon_core::result::AppResult;
use beacon_core::types::{GeoPoint, UserId};
use beacon_entity::user::{User, UserRole};

/// Read-only access to the external user store.
///
/// Implementations are expected to exclude non-active and unverified
/// users at the store layer; the resolver re-filters post-hoc either way,
/// so over-returning is safe and under-returning is not.
///
/// Errors from these methods mean the store is unreachable and abort the
/// whole dispatch call.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// All notifiable users, optionally restricted to a role set.
    async fn find_eligible(&self, roles: Option<&[UserRole]>) -> AppResult<Vec<User>>;

    /// Notifiable users within `radius_km` of `center`, optionally
    /// restricted to a role set.
    async fn find_eligible_by_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
        roles: Option<&[UserRole]>,
    ) -> AppResult<Vec<User>>;

    /// Notifiable users whose profile organization, city, or state
    /// matches one of the given area names. The reference semantics are
    /// case-sensitive containment; stores may refine this.
    async fn find_by_area_names(
        &self,
        names: &[String],
        roles: Option<&[UserRole]>,
    ) -> AppResult<Vec<User>>;

    /// Notifiable users holding any of the given roles.
    async fn find_by_roles(&self, roles: &[UserRole]) -> AppResult<Vec<User>>;

    /// Users by explicit id list. Unknown ids are skipped, not errors.
    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>>;
}
