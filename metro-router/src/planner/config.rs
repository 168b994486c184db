//! Route weighting configuration.

use chrono::Duration;

/// Parameters for route search and the metrics reported with a route.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Travel time charged per hop (minutes), whatever the line.
    pub minutes_per_hop: i64,

    /// Extra cost for changing line at an interchange.
    /// Each hop costs 1 on top of this.
    pub transfer_penalty: u32,
}

impl RouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(minutes_per_hop: i64, transfer_penalty: u32) -> Self {
        Self {
            minutes_per_hop,
            transfer_penalty,
        }
    }

    /// Returns the time per hop as a Duration.
    pub fn time_per_hop(&self) -> Duration {
        Duration::minutes(self.minutes_per_hop)
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            minutes_per_hop: 5,
            transfer_penalty: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RouteConfig::default();

        assert_eq!(config.minutes_per_hop, 5);
        assert_eq!(config.transfer_penalty, 1);
    }

    #[test]
    fn duration_methods() {
        let config = RouteConfig::default();

        assert_eq!(config.time_per_hop(), Duration::minutes(5));
    }

    #[test]
    fn custom_config() {
        let config = RouteConfig::new(3, 4);

        assert_eq!(config.minutes_per_hop, 3);
        assert_eq!(config.transfer_penalty, 4);
        assert_eq!(config.time_per_hop(), Duration::minutes(3));
    }
}
