use shared::{InitialSetupRequest, InitialSetupResponse};

use super::{decode, ApiClient};
use crate::error::{ApiError, Operation};
use crate::transport::Method;

impl ApiClient {
    /// Register income, saving goal and the first fixed costs in one go
    pub async fn submit_initial_setup(
        &self,
        input: &InitialSetupRequest,
    ) -> Result<InitialSetupResponse, ApiError> {
        let response = self
            .send_json(Operation::SubmitSetup, Method::Post, "/setup", input)
            .await?;
        decode(Operation::SubmitSetup, &response)
    }
}
