use crate::models::Error;
use crate::types::FontSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagCloudConfig {
    pub min_font: FontSize,
    pub max_font: FontSize,
    pub stylesheet_url: &'static str,
}

impl TagCloudConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_font > self.max_font {
            return Err(Error::InvalidConfig(format!(
                "min_font ({}) exceeds max_font ({})",
                self.min_font, self.max_font
            )));
        }

        Ok(())
    }
}
