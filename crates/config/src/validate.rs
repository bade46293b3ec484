use crate::{
    error::{ConfigError, Result},
    schema::{DashboardConfig, Limits},
};

impl DashboardConfig {
    /// Reject values that would leave the page unusable.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }
        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::Invalid("server.bind must not be empty".into()));
        }
        self.limits.validate()
    }
}

impl Limits {
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("keyword_options", self.keyword_options),
            ("location_options", self.location_options),
            ("top_persons", self.top_persons),
            ("top_locations", self.top_locations),
            ("word_cloud_words", self.word_cloud_words),
            ("heatmap_labels", self.heatmap_labels),
            ("hierarchy_pair_cap", self.hierarchy_pair_cap),
            ("hierarchy_top_locations", self.hierarchy_top_locations),
        ];
        match sizes.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(ConfigError::Invalid(format!(
                "limits.{name} must be greater than zero"
            ))),
            None => Ok(()),
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        DashboardConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_port_rejected() {
        let mut config = DashboardConfig::default();
        config.server.port = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn zero_limit_names_the_field() {
        let mut config = DashboardConfig::default();
        config.limits.heatmap_labels = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("limits.heatmap_labels"));
    }
}
