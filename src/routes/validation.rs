use crate::constants::{
    ERR_INVALID_EMAIL, ERR_NAME_REQUIRED, ERR_PASSWORDS_DO_NOT_MATCH, ERR_PASSWORD_NO_DIGIT,
    ERR_PASSWORD_NO_LOWERCASE, ERR_PASSWORD_NO_SPECIAL, ERR_PASSWORD_NO_UPPERCASE,
    ERR_PASSWORD_TOO_SHORT, MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS,
};

/// Check a registration form, collecting every rule that fails
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    password2: &str,
) -> Result<(), Vec<String>> {
    let mut errors: Vec<&str> = Vec::new();

    if name.trim().is_empty() {
        errors.push(ERR_NAME_REQUIRED);
    }

    if password != password2 {
        errors.push(ERR_PASSWORDS_DO_NOT_MATCH);
    }

    errors.extend(password_policy_violations(password));

    if !is_plausible_email(email) {
        errors.push(ERR_INVALID_EMAIL);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into_iter().map(str::to_string).collect())
    }
}

/// Password composition rules enforced at registration
pub fn password_policy_violations(password: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(ERR_PASSWORD_TOO_SHORT);
    }
    if !password.chars().any(char::is_uppercase) {
        errors.push(ERR_PASSWORD_NO_UPPERCASE);
    }
    if !password.chars().any(char::is_lowercase) {
        errors.push(ERR_PASSWORD_NO_LOWERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(ERR_PASSWORD_NO_DIGIT);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        errors.push(ERR_PASSWORD_NO_SPECIAL);
    }

    errors
}

fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_registration() {
        assert!(validate_registration("Ann", "ann@example.com", "Str0ng!pass", "Str0ng!pass").is_ok());
    }

    #[test]
    fn test_password_policy() {
        assert!(password_policy_violations("Str0ng!pass").is_empty());

        assert_eq!(password_policy_violations("S0!a"), vec![ERR_PASSWORD_TOO_SHORT]);
        assert_eq!(
            password_policy_violations("str0ng!pass"),
            vec![ERR_PASSWORD_NO_UPPERCASE]
        );
        assert_eq!(
            password_policy_violations("STR0NG!PASS"),
            vec![ERR_PASSWORD_NO_LOWERCASE]
        );
        assert_eq!(
            password_policy_violations("Strong!pass"),
            vec![ERR_PASSWORD_NO_DIGIT]
        );
        assert_eq!(
            password_policy_violations("Str0ngpass"),
            vec![ERR_PASSWORD_NO_SPECIAL]
        );
    }

    #[test]
    fn test_digit_rule_only_accepts_decimal_digits() {
        assert_eq!(
            password_policy_violations("Strong!pass½"),
            vec![ERR_PASSWORD_NO_DIGIT]
        );
        assert_eq!(
            password_policy_violations("Strong!passⅫ"),
            vec![ERR_PASSWORD_NO_DIGIT]
        );
        assert!(password_policy_violations("Strong!pass7").is_empty());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Cyrillic letters take two bytes each
        assert!(password_policy_violations("Пароль1!").is_empty());
        assert!(password_policy_violations("Парол1!").contains(&ERR_PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_registration(" ", "not-an-email", "abc", "abd").unwrap_err();

        assert!(errors.contains(&ERR_NAME_REQUIRED.to_string()));
        assert!(errors.contains(&ERR_PASSWORDS_DO_NOT_MATCH.to_string()));
        assert!(errors.contains(&ERR_PASSWORD_TOO_SHORT.to_string()));
        assert!(errors.contains(&ERR_INVALID_EMAIL.to_string()));
    }

    #[test]
    fn test_email_needs_at_and_dot() {
        assert!(is_plausible_email("a@b.c"));
        assert!(!is_plausible_email("ab.c"));
        assert!(!is_plausible_email("a@bc"));
    }
}
