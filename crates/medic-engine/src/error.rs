use thiserror::Error;

use medic_protocols::error::ProtocolError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Registry(#[from] ProtocolError),

    #[error("protocol '{protocol}' is not listed under category '{category}'")]
    NotInCategory { protocol: String, category: String },
}
