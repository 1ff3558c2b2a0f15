pub mod signup;
pub mod status;

#[cfg(test)]
pub(crate) fn state() -> crate::AppState {
    use std::sync::Arc;

    use crate::account::AccountRepository;
    use crate::email::EmailValidatorAdapter;
    use crate::signup::SignupController;

    crate::AppState {
        config: Arc::new(crate::config::Configuration::default()),
        controller: SignupController::new(
            Arc::new(EmailValidatorAdapter),
            Arc::new(AccountRepository::new()),
        ),
    }
}
