use crate::{
    conversion::command::{ConversionCommand, ConversionOutcome},
    error::AppResult,
};

#[async_trait::async_trait]
pub trait ConvertImageUseCase: Send + Sync {
    async fn convert_image(&self, command: ConversionCommand) -> AppResult<ConversionOutcome>;
}
