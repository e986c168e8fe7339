//! Middleware de autenticación JWT
//!
//! Verifica el token del proveedor de identidad y resuelve el rol del
//! usuario a partir de `user_profiles`.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    models::user_profile::UserRole,
    services::personnel_workflow::Actor,
    state::AppState,
    utils::{
        errors::{forbidden_error, AppError, AppResult},
        jwt::{extract_token_from_header, verify_token},
    },
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn actor(&self) -> Actor {
        Actor {
            user_id: self.user_id,
            role: self.role,
        }
    }

    /// Exigir rol recruiter o hr_admin
    pub fn require_recruiter(&self, operation: &str) -> AppResult<()> {
        if self.role.can_recruit() {
            Ok(())
        } else {
            Err(forbidden_error(operation, "requires recruiter or hr_admin role"))
        }
    }
}

/// Middleware de autenticación JWT
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &state.jwt)?;
    let user_id = claims.user_id()?;

    // El perfil manda sobre el rol del token
    let role = match state.repositories.user_profiles.find_by_user_id(user_id).await? {
        Some(profile) => profile.role,
        None => UserRole::from_claim(claims.role.as_deref()),
    };

    debug!("🔐 Usuario {} autenticado como {:?}", user_id, role);

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
        role,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: None,
            role,
        }
    }

    #[test]
    fn test_role_guards() {
        assert!(user(UserRole::HrAdmin).require_recruiter("analyze").is_ok());
        assert!(user(UserRole::Employee).require_recruiter("analyze").is_err());
        assert!(user(UserRole::Recruiter).require_recruiter("analyze").is_ok());
        assert!(user(UserRole::Manager).require_recruiter("analyze").is_err());
    }

    #[test]
    fn test_actor_carries_role() {
        let authenticated = user(UserRole::Manager);
        let actor = authenticated.actor();
        assert_eq!(actor.user_id, authenticated.user_id);
        assert_eq!(actor.role, UserRole::Manager);
    }
}
