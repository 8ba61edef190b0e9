use chrono::Utc;
use dashmap::mapref::entry::Entry;
use tracing::info;
use uuid::Uuid;

use crate::auth::password;
use crate::error::AppError;
use crate::models::account::{Account, AccountView, Role};
use crate::state::AppState;

const MIN_PASSWORD_CHARS: usize = 6;

pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role: Role,
}

pub fn register(state: &AppState, new: NewAccount) -> Result<AccountView, AppError> {
    if new.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if new.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }
    if new.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_CHARS} characters"
        )));
    }

    let password_hash = password::hash(&new.password)?;

    // The email index entry is the uniqueness gate: occupied means a
    // concurrent or earlier registration already claimed this address.
    match state.accounts_by_email.entry(new.email.clone()) {
        Entry::Occupied(_) => Err(AppError::DuplicateEmail),
        Entry::Vacant(slot) => {
            let account = Account {
                id: Uuid::new_v4(),
                name: new.name,
                email: new.email,
                phone: new.phone,
                password_hash,
                role: new.role,
                created_at: Utc::now(),
            };

            slot.insert(account.id);
            state.accounts.insert(account.id, account.clone());

            state
                .metrics
                .accounts_registered_total
                .with_label_values(&[account.role.as_str()])
                .inc();
            info!(account_id = %account.id, role = %account.role, "account registered");

            Ok(account.view())
        }
    }
}

// Unknown email and wrong password collapse into one error kind so a login
// response cannot be used to probe which addresses are registered.
pub fn authenticate(state: &AppState, email: &str, password: &str) -> Result<Account, AppError> {
    let account = state
        .accounts_by_email
        .get(email)
        .and_then(|id| state.accounts.get(&*id).map(|entry| entry.value().clone()));

    let Some(account) = account else {
        return Err(AppError::InvalidCredentials);
    };

    if !password::verify(password, &account.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    Ok(account)
}

pub fn resolve_subject(state: &AppState, email: &str) -> Result<Account, AppError> {
    state
        .accounts_by_email
        .get(email)
        .and_then(|id| state.accounts.get(&*id).map(|entry| entry.value().clone()))
        .ok_or_else(|| AppError::NotFound(format!("account {email} not found")))
}

pub fn list_riders(state: &AppState) -> Vec<AccountView> {
    state
        .accounts
        .iter()
        .filter(|entry| entry.value().role == Role::Rider)
        .map(|entry| entry.value().view())
        .collect()
}
