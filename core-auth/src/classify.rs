//! Provider failure classification.
//!
//! Maps the opaque failure codes surfaced by the identity provider to the
//! fixed messages the UI shows. Only the codes below get specific
//! handling; anything else falls back to the generic message for its
//! flow. The code strings belong to the provider and are matched
//! verbatim.

/// Display message for a failed sign-in.
pub fn sign_in_failure_message(code: &str) -> &'static str {
    match code {
        "auth/invalid-email" => "Invalid Email",
        "auth/user-disabled" => "User is disabled.",
        "auth/user-not-found" => "This email is not registered",
        "auth/wrong-password" => "Wrong password",
        _ => "There was an error while attempting to sign in.",
    }
}

/// Display message for a failed sign-up.
pub fn sign_up_failure_message(code: &str) -> &'static str {
    match code {
        "auth/email-already-in-use" => "This email already has an account",
        "auth/invalid-email" => "Invalid email",
        "auth/operation-not-allowed" => "Email/password accounts are not enabled.",
        "auth/weak-password" => "Password is not strong",
        _ => "An error ocurred.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_codes_map_to_exact_messages() {
        assert_eq!(sign_in_failure_message("auth/invalid-email"), "Invalid Email");
        assert_eq!(sign_in_failure_message("auth/user-disabled"), "User is disabled.");
        assert_eq!(
            sign_in_failure_message("auth/user-not-found"),
            "This email is not registered"
        );
        assert_eq!(sign_in_failure_message("auth/wrong-password"), "Wrong password");
    }

    #[test]
    fn unknown_sign_in_codes_get_the_generic_message() {
        assert_eq!(
            sign_in_failure_message("auth/foo"),
            "There was an error while attempting to sign in."
        );
        assert_eq!(
            sign_in_failure_message(""),
            "There was an error while attempting to sign in."
        );
    }

    #[test]
    fn sign_up_codes_map_to_exact_messages() {
        assert_eq!(
            sign_up_failure_message("auth/email-already-in-use"),
            "This email already has an account"
        );
        assert_eq!(sign_up_failure_message("auth/invalid-email"), "Invalid email");
        assert_eq!(
            sign_up_failure_message("auth/operation-not-allowed"),
            "Email/password accounts are not enabled."
        );
        assert_eq!(
            sign_up_failure_message("auth/weak-password"),
            "Password is not strong"
        );
    }

    #[test]
    fn unknown_sign_up_codes_get_the_generic_message() {
        assert_eq!(sign_up_failure_message("auth/foo"), "An error ocurred.");
    }

    #[test]
    fn casing_differs_between_flows_for_invalid_email() {
        // Sign-in shows "Invalid Email", sign-up "Invalid email"; both are
        // long-standing display strings.
        assert_ne!(
            sign_in_failure_message("auth/invalid-email"),
            sign_up_failure_message("auth/invalid-email")
        );
    }
}
