use serde::{Deserialize, Serialize};

pub mod comment;
pub mod context;
pub mod moderation;
pub mod post;
pub mod report;
pub mod utils;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SuccessResponse {
  pub success: bool,
}

impl Default for SuccessResponse {
  fn default() -> Self {
    SuccessResponse { success: true }
  }
}
