use rand::{distr::Alphanumeric, Rng};

/// Length of generated invite tokens.
pub const INVITE_TOKEN_LENGTH: usize = 32;

/// Generates a random alphanumeric invite token.
pub fn generate_invite_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(INVITE_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_invite_token, INVITE_TOKEN_LENGTH};

    #[test]
    fn generates_alphanumeric_tokens_of_fixed_length() {
        let token = generate_invite_token();

        assert_eq!(token.len(), INVITE_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generates_distinct_tokens() {
        assert_ne!(generate_invite_token(), generate_invite_token());
    }
}
