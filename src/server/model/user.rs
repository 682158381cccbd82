//! User domain models and parameters.
//!
//! Provides domain models for application accounts with their role and, for workers,
//! the business they work at. Includes parameter types for account creation, updates
//! and paginated queries.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{
        CreateUserDto, CreateWorkerDto, PaginatedUsersDto, RegisterDto, Role, UpdateProfileDto,
        UpdateUserDto, UserDto,
    },
    server::{error::AppError, util::parse::parse_role},
};

/// Application account with role and employment information.
///
/// The password hash is deliberately absent; it is only read by the credentials
/// lookup in `UserRepository`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lowercased email address, unique across accounts.
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    /// Business employing this account (workers only).
    pub business_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            phone: self.phone,
            role: self.role,
            business_id: self.business_id,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseRole))` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = parse_role(&entity.role)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            phone: entity.phone,
            role,
            business_id: entity.business_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Whether this account works at the given business.
    pub fn works_at(&self, business_id: i32) -> bool {
        self.role == Role::Worker && self.business_id == Some(business_id)
    }
}

/// Parameters for inserting a new account.
///
/// The password must already be hashed; repositories never see plaintext.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub business_id: Option<i32>,
}

/// Parameters for updating an account. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub id: i32,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub business_id: Option<i32>,
    pub password_hash: Option<String>,
}

/// Plaintext account details validated and hashed by the service layer.
#[derive(Debug, Clone)]
pub struct NewAccountParam {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub business_id: Option<i32>,
}

impl NewAccountParam {
    /// Self-registration always creates a client account.
    pub fn from_register_dto(dto: RegisterDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            name: dto.name,
            phone: dto.phone,
            role: Role::Client,
            business_id: None,
        }
    }

    pub fn from_create_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            name: dto.name,
            phone: dto.phone,
            role: dto.role,
            business_id: dto.business_id,
        }
    }

    /// A worker account employed by `business_id`.
    pub fn from_worker_dto(business_id: i32, dto: CreateWorkerDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            name: dto.name,
            phone: dto.phone,
            role: Role::Worker,
            business_id: Some(business_id),
        }
    }
}

/// Changes a user may make to their own account.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            password: dto.password,
        }
    }
}

impl UpdateUserParam {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            name: dto.name,
            phone: dto.phone,
            role: dto.role,
            business_id: dto.business_id,
            password_hash: None,
        }
    }
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
    /// Restrict the listing to one role.
    pub role: Option<Role>,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
