use crate::ClaimDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub claim: ClaimDto,
}
