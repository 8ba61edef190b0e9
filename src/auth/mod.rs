pub mod password;
pub mod token;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::error::AppError;
use crate::models::account::{Account, Role};
use crate::state::AppState;
use crate::workflow::accounts;

pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AppError::TokenMissing)?
        .to_str()
        .map_err(|_| AppError::TokenMissing)?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AppError::TokenMissing)
}

// Gate for every authenticated route: validate the bearer token, check the
// claimed role against the route's required role, then resolve the subject
// to an account. A role mismatch is a hard Forbidden, never a no-op.
pub fn require_role(
    state: &AppState,
    headers: &HeaderMap,
    required: Role,
) -> Result<Account, AppError> {
    let outcome = authorize(state, headers, required);

    if let Err(err) = &outcome {
        state
            .metrics
            .auth_failures_total
            .with_label_values(&[err.kind()])
            .inc();
    }

    outcome
}

fn authorize(state: &AppState, headers: &HeaderMap, required: Role) -> Result<Account, AppError> {
    let token = bearer_token(headers)?;
    let claims = state.tokens.validate(token)?;

    if claims.role != required {
        return Err(AppError::Forbidden(format!("{required} access required")));
    }

    accounts::resolve_subject(state, &claims.sub)
}
