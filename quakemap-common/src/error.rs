#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuakemapCommonError {
    #[error("Invalid CSS color: {0}")]
    InvalidColor(String),
}
