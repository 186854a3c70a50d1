//! User profile, contact info, and reference reads.

use std::sync::Arc;

use serde::Serialize;

use helpdesk_core::error::AppError;
use helpdesk_core::result::AppResult;
use helpdesk_database::repositories::inventory::InventoryRepository;
use helpdesk_database::repositories::service_type::ServiceTypeRepository;
use helpdesk_database::repositories::unit::UnitRepository;
use helpdesk_database::repositories::user::UserRepository;
use helpdesk_entity::inventory::{Hardware, Software};
use helpdesk_entity::service_type::ServiceType;
use helpdesk_entity::unit::Unit;
use helpdesk_entity::user::{ContactInfo, User, UserRole};

use crate::context::RequestContext;

/// The equipment assigned to a user.
#[derive(Debug, Clone, Serialize)]
pub struct UserInventory {
    /// Hardware items assigned to the user.
    pub hardware: Vec<Hardware>,
    /// Software licenses assigned to the user.
    pub software: Vec<Software>,
}

/// Serves user profiles, contact updates, and reference lists.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    unit_repo: Arc<UnitRepository>,
    service_type_repo: Arc<ServiceTypeRepository>,
    inventory_repo: Arc<InventoryRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        unit_repo: Arc<UnitRepository>,
        service_type_repo: Arc<ServiceTypeRepository>,
        inventory_repo: Arc<InventoryRepository>,
    ) -> Self {
        Self {
            user_repo,
            unit_repo,
            service_type_repo,
            inventory_repo,
        }
    }

    /// The caller's own profile.
    pub async fn profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Update the caller's contact fields.
    pub async fn update_contact(&self, ctx: &RequestContext, info: ContactInfo) -> AppResult<User> {
        validate_phone_number(&info.phone_number)?;
        self.user_repo
            .update_contact(ctx.user_id, info.room_number.as_deref(), &info.phone_number)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// All managers, for the transfer receiver picker.
    pub async fn managers(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_by_role(UserRole::Manager).await
    }

    /// All experts, for the assignment picker.
    pub async fn experts(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_by_role(UserRole::Expert).await
    }

    /// All organizational units.
    pub async fn units(&self) -> AppResult<Vec<Unit>> {
        self.unit_repo.find_all().await
    }

    /// All service types.
    pub async fn service_types(&self) -> AppResult<Vec<ServiceType>> {
        self.service_type_repo.find_all().await
    }

    /// The equipment registry entries for the caller.
    pub async fn inventory(&self, ctx: &RequestContext) -> AppResult<UserInventory> {
        Ok(UserInventory {
            hardware: self.inventory_repo.find_hardware_by_user(ctx.user_id).await?,
            software: self.inventory_repo.find_software_by_user(ctx.user_id).await?,
        })
    }
}

/// Office phone numbers are internal extensions: required, digits only,
/// exactly 8 characters.
fn validate_phone_number(phone: &str) -> AppResult<()> {
    if phone.is_empty() {
        return Err(AppError::validation("Phone number is required"));
    }
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::validation("Phone number must contain only digits"));
    }
    if phone.len() != 8 {
        return Err(AppError::validation("Phone number must be exactly 8 digits"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::error::ErrorKind;

    #[test]
    fn test_valid_phone_number() {
        assert!(validate_phone_number("12345678").is_ok());
        assert!(validate_phone_number("00000000").is_ok());
    }

    #[test]
    fn test_phone_number_is_required() {
        let err = validate_phone_number("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_phone_number_rejects_non_digits() {
        assert!(validate_phone_number("1234-678").is_err());
        assert!(validate_phone_number("1234567a").is_err());
        assert!(validate_phone_number("+2345678").is_err());
        assert!(validate_phone_number("1234 678").is_err());
    }

    #[test]
    fn test_phone_number_length() {
        assert!(validate_phone_number("1234567").is_err());
        assert!(validate_phone_number("123456789").is_err());
    }
}
