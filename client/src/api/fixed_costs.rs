use shared::{FixedCost, FixedCostInput, FixedCostListResponse, FixedCostResponse};

use super::{decode, ApiClient};
use crate::error::{ApiError, Operation};
use crate::transport::Method;

impl ApiClient {
    pub async fn get_fixed_costs(&self) -> Result<Vec<FixedCost>, ApiError> {
        let response = self
            .send(Operation::ListFixedCosts, Method::Get, "/fixed-costs", None)
            .await?;
        let data: FixedCostListResponse = decode(Operation::ListFixedCosts, &response)?;
        Ok(data.fixed_costs)
    }

    pub async fn create_fixed_cost(&self, input: &FixedCostInput) -> Result<FixedCost, ApiError> {
        let response = self
            .send_json(Operation::CreateFixedCost, Method::Post, "/fixed-costs", input)
            .await?;
        let data: FixedCostResponse = decode(Operation::CreateFixedCost, &response)?;
        Ok(data.fixed_cost)
    }

    pub async fn update_fixed_cost(
        &self,
        id: i64,
        input: &FixedCostInput,
    ) -> Result<FixedCost, ApiError> {
        let path = format!("/fixed-costs/{}", id);
        let response = self
            .send_json(Operation::UpdateFixedCost, Method::Put, &path, input)
            .await?;
        let data: FixedCostResponse = decode(Operation::UpdateFixedCost, &response)?;
        Ok(data.fixed_cost)
    }

    pub async fn delete_fixed_cost(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/fixed-costs/{}", id);
        self.send(Operation::DeleteFixedCost, Method::Delete, &path, None)
            .await?;
        Ok(())
    }
}
