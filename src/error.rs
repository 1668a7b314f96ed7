pub type IconResult<T> = Result<T, IconError>;

#[derive(thiserror::Error, Debug)]
pub enum IconError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            IconError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(IconError::font("x").to_string().contains("font error:"));
        assert!(IconError::render("x").to_string().contains("render error:"));
    }

    #[test]
    fn io_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = IconError::Io(base);
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = IconError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
