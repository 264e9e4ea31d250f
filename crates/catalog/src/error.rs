use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog item '{0}' has an empty id")]
    EmptyItemId(String),

    #[error("duplicate catalog item id: {0}")]
    DuplicateItemId(String),

    #[error("catalog item '{0}' has no ingredients")]
    NoIngredients(String),

    #[error("catalog item '{id}' has base match score {score}, expected 0-100")]
    MatchScoreOutOfRange { id: String, score: u8 },
}
