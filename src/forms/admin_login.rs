use super::{check_email, FieldErrors};
use crate::dashboard::Role;

/// Administrator sign-in form
///
/// There is no credential check behind it: a well-formed form grants the
/// admin role.
#[derive(Debug, Clone, Default)]
pub struct AdminLoginForm {
    pub email: String,
    pub password: String,
}

impl AdminLoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(
            &mut errors,
            &self.email,
            "Email address is required.",
            "Please enter a valid email address.",
        );
        if self.password.is_empty() {
            errors.insert("password", "Password is required.");
        }
        errors.into_result()
    }

    pub fn sign_in(&self) -> Result<Role, FieldErrors> {
        self.validate()?;
        Ok(Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_grants_admin_role() {
        let form = AdminLoginForm {
            email: "adebisi.a@avianre.com".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(form.sign_in().unwrap(), Role::Admin);
    }

    #[test]
    fn test_messages() {
        let errors = AdminLoginForm {
            email: "adebisi".to_string(),
            password: String::new(),
        }
        .sign_in()
        .unwrap_err();

        assert_eq!(errors.get("email"), Some("Please enter a valid email address."));
        assert_eq!(errors.get("password"), Some("Password is required."));
    }
}
