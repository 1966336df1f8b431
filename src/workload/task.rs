//! @ai:module:intent Workload definition for benchmark cases
//! @ai:module:layer domain
//! @ai:module:public_api Workload
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::workload::mask::parse_mask;
use serde::{Deserialize, Serialize};

/// @ai:intent A named benchmark case: mask pattern plus length range
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub name: String,
    pub mask: String,
    pub min_length: u32,
    pub max_length: u32,
}

impl Workload {
    /// @ai:intent Create a workload
    /// @ai:effects pure
    pub fn new(name: &str, mask: &str, min_length: u32, max_length: u32) -> Self {
        Self {
            name: name.to_string(),
            mask: mask.to_string(),
            min_length,
            max_length,
        }
    }

    /// @ai:intent Number of generated characters the mask describes
    /// @ai:effects pure
    pub fn mask_len(&self) -> Result<usize> {
        parse_mask(&self.mask)
            .map(|positions| positions.len())
            .map_err(|reason| self.invalid(reason))
    }

    /// @ai:intent Check the workload is something every builder can accept
    /// @ai:post Ok means mask parses, 1 <= min_length <= max_length <= mask_len
    /// @ai:effects pure
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name is empty".to_string()));
        }

        let mask_len = self.mask_len()?;

        if mask_len == 0 {
            return Err(self.invalid("mask is empty".to_string()));
        }

        if self.min_length == 0 {
            return Err(self.invalid("min_length must be at least 1".to_string()));
        }

        if self.min_length > self.max_length {
            return Err(self.invalid(format!(
                "min_length {} exceeds max_length {}",
                self.min_length, self.max_length
            )));
        }

        if self.max_length as usize > mask_len {
            return Err(self.invalid(format!(
                "max_length {} exceeds mask length {}",
                self.max_length, mask_len
            )));
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> Error {
        Error::InvalidWorkload {
            name: self.name.clone(),
            reason,
        }
    }
}
