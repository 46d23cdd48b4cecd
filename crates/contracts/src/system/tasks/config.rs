use super::catalog::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES};
use anyhow::ensure;

/// Largest generated fixture the screen accepts
pub const MAX_SEED_COUNT: usize = 1000;
use serde::{Deserialize, Serialize};

/// Tunables of the task screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Page sizes offered by the pagination footer
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// Number of generated tasks the store starts with
    pub seed_count: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
            toast_duration_ms: 3000,
            seed_count: 25,
        }
    }
}

impl ScreenConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.page_sizes.is_empty(), "page_sizes must not be empty");
        ensure!(
            self.page_sizes.iter().all(|size| *size > 0),
            "page sizes must be positive: {:?}",
            self.page_sizes
        );
        ensure!(
            self.page_sizes.contains(&self.default_page_size),
            "default page size {} is not one of {:?}",
            self.default_page_size,
            self.page_sizes
        );
        ensure!(self.toast_duration_ms > 0, "toast_duration_ms must be positive");
        ensure!(
            self.seed_count <= MAX_SEED_COUNT,
            "seed_count {} exceeds {}",
            self.seed_count,
            MAX_SEED_COUNT
        );
        Ok(())
    }

    pub fn is_allowed_page_size(&self, size: usize) -> bool {
        self.page_sizes.contains(&size)
    }
}
