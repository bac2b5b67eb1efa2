//! Recipient resolution — determines who should receive an alert.

use std::sync::Arc;

use tracing::debug;

use beacon_core::error::AppError;
use beacon_core::result::AppResult;
use beacon_core::types::UserId;
use beacon_entity::alert::Alert;
use beacon_entity::dispatch::RecipientSet;
use beacon_entity::user::{User, UserRole};

use crate::traits::UserStore;

/// Caller-supplied narrowing for broad resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Restrict the base and geo queries to these roles.
    pub roles: Option<Vec<UserRole>>,
    /// Override the severity-derived geo radius.
    pub radius_km: Option<f64>,
}

/// Resolves a deduplicated set of notifiable users for an alert.
///
/// Resolution unions up to three sources: the base/geo query, an
/// area-name fallback when that query matches nobody, and the
/// emergency-personnel override for severe and extreme alerts. An empty
/// result is a normal outcome; only store unreachability is an error.
#[derive(Clone)]
pub struct RecipientResolver {
    user_store: Arc<dyn UserStore>,
}

impl RecipientResolver {
    /// Creates a new resolver over the given user store.
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// Resolve the recipient set for a broad dispatch.
    pub async fn resolve(&self, alert: &Alert, options: &ResolveOptions) -> AppResult<RecipientSet> {
        let roles = options.roles.as_deref();
        let mut recipients = RecipientSet::new();

        // Base query, narrowed to the geo radius when the alert has a
        // point location.
        let base = match alert.location {
            Some(center) => {
                let radius_km = options
                    .radius_km
                    .unwrap_or_else(|| alert.severity.default_radius_km());
                self.user_store
                    .find_eligible_by_radius(center, radius_km, roles)
                    .await
                    .map_err(Self::store_error)?
            }
            None => self
                .user_store
                .find_eligible(roles)
                .await
                .map_err(Self::store_error)?,
        };
        Self::add_notifiable(&mut recipients, base);

        // Area-name fallback: only when the base query matched nobody and
        // the alert names affected areas.
        if recipients.is_empty() && !alert.affected_areas.is_empty() {
            let names = alert.area_names();
            let matched = self
                .user_store
                .find_by_area_names(&names, roles)
                .await
                .map_err(Self::store_error)?;
            debug!(
                alert_id = %alert.id,
                areas = ?names,
                matched = matched.len(),
                "geo resolution empty, used area-name fallback"
            );
            Self::add_notifiable(&mut recipients, matched);
        }

        // Emergency-personnel override: severe and extreme alerts always
        // reach coordinators, responders, and admins, wherever they are.
        if alert.severity.is_emergency() {
            let personnel = self
                .user_store
                .find_by_roles(&UserRole::emergency_personnel())
                .await
                .map_err(Self::store_error)?;
            Self::add_notifiable(&mut recipients, personnel);
        }

        debug!(
            alert_id = %alert.id,
            severity = %alert.severity,
            recipients = recipients.len(),
            "resolved recipients"
        );
        Ok(recipients)
    }

    /// Resolve an explicit id list for a targeted resend. Bypasses geo,
    /// area, and override resolution entirely.
    pub async fn resolve_ids(&self, ids: &[UserId]) -> AppResult<RecipientSet> {
        let users = self
            .user_store
            .find_by_ids(ids)
            .await
            .map_err(Self::store_error)?;
        let mut recipients = RecipientSet::new();
        Self::add_notifiable(&mut recipients, users);
        Ok(recipients)
    }

    /// Resolve a role cohort for a role-based resend.
    pub async fn resolve_role(&self, role: UserRole) -> AppResult<RecipientSet> {
        let users = self
            .user_store
            .find_by_roles(&[role])
            .await
            .map_err(Self::store_error)?;
        let mut recipients = RecipientSet::new();
        Self::add_notifiable(&mut recipients, users);
        Ok(recipients)
    }

    /// Post-hoc eligibility filter. Applied to every store batch so a
    /// permissive store cannot leak inactive or unverified users.
    fn add_notifiable(recipients: &mut RecipientSet, users: Vec<User>) {
        recipients.extend(users.into_iter().filter(User::is_notifiable));
    }

    fn store_error(err: AppError) -> AppError {
        AppError::resolution(format!("user store query failed: {err}"))
    }
}
