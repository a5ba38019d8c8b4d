use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl ModelError {
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Validation(msgs) => msgs,
        }
    }
}
