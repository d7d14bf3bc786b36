use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid PDB id '{0}'. Expected four characters (e.g., '1CRN').")]
    InvalidLength(String),

    #[error("Invalid PDB id '{0}'. The first character must be a digit from 1 to 9.")]
    InvalidLeadingCharacter(String),

    #[error("Invalid PDB id '{0}'. Only letters and digits are allowed.")]
    InvalidCharacter(String),
}

/// Validates a PDB id and returns it in canonical upper case.
pub fn parse_pdb_id(input: &str) -> Result<String, ParseError> {
    let id = input.trim();
    if id.chars().count() != 4 {
        return Err(ParseError::InvalidLength(input.to_string()));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ParseError::InvalidCharacter(input.to_string()));
    }
    if !matches!(id.chars().next(), Some('1'..='9')) {
        return Err(ParseError::InvalidLeadingCharacter(input.to_string()));
    }
    Ok(id.to_ascii_uppercase())
}
