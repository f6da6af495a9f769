use folio_core_health_contracts::{HealthFeatureService, HealthStatus};
use folio_shared_contracts::time::TimeService;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Time> {
    time: Time,
}

impl<Time> HealthFeatureServiceImpl<Time> {
    pub fn new(time: Time) -> Self {
        Self { time }
    }
}

impl<Time> HealthFeatureService for HealthFeatureServiceImpl<Time>
where
    Time: TimeService,
{
    async fn get_status(&self) -> HealthStatus {
        HealthStatus {
            timestamp: self.time.now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use folio_shared_contracts::time::MockTimeService;

    use super::*;

    #[tokio::test]
    async fn get_status() {
        // Arrange
        let now = chrono::Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();
        let time = MockTimeService::new().with_now(now);
        let sut = HealthFeatureServiceImpl::new(time);

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { timestamp: now });
    }
}
