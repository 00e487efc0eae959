//! Search configuration for the route planner.

/// Configuration parameters for route search.
///
/// Times are in hours, distances in metres.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteConfig {
    /// Average travel speed (metres per hour).
    pub speed_m_per_hour: f64,

    /// Time added in minimum-distance mode when consecutive segments are on
    /// different lines (hours).
    /// Only affects the reported time and the equal-distance tie-break.
    pub distance_transfer_penalty_hours: f64,

    /// Time added per line change while searching for the fewest transfers
    /// (hours).
    pub search_transfer_penalty_hours: f64,

    /// Time added per line change when reporting the time of the
    /// fewest-transfers route (hours).
    pub report_transfer_penalty_hours: f64,
}

impl RouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        speed_m_per_hour: f64,
        distance_transfer_penalty_hours: f64,
        search_transfer_penalty_hours: f64,
        report_transfer_penalty_hours: f64,
    ) -> Self {
        Self {
            speed_m_per_hour,
            distance_transfer_penalty_hours,
            search_transfer_penalty_hours,
            report_transfer_penalty_hours,
        }
    }

    /// Hours needed to travel `length` metres.
    pub fn travel_hours(&self, length: u64) -> f64 {
        length as f64 / self.speed_m_per_hour
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            speed_m_per_hour: 80_000.0,
            distance_transfer_penalty_hours: 0.083, // ~5 minutes
            search_transfer_penalty_hours: 166.6,
            report_transfer_penalty_hours: 0.35,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RouteConfig::default();

        assert_eq!(config.speed_m_per_hour, 80_000.0);
        assert_eq!(config.distance_transfer_penalty_hours, 0.083);
        assert_eq!(config.search_transfer_penalty_hours, 166.6);
        assert_eq!(config.report_transfer_penalty_hours, 0.35);
    }

    #[test]
    fn travel_hours() {
        let config = RouteConfig::default();

        assert_eq!(config.travel_hours(0), 0.0);
        assert_eq!(config.travel_hours(80_000), 1.0);
        assert_eq!(config.travel_hours(20_000), 0.25);
    }

    #[test]
    fn custom_config() {
        let config = RouteConfig::new(40_000.0, 0.1, 10.0, 0.2);

        assert_eq!(config.speed_m_per_hour, 40_000.0);
        assert_eq!(config.distance_transfer_penalty_hours, 0.1);
        assert_eq!(config.search_transfer_penalty_hours, 10.0);
        assert_eq!(config.report_transfer_penalty_hours, 0.2);
        assert_eq!(config.travel_hours(20_000), 0.5);
    }
}
