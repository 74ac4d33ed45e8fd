//! Equipment service

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::{
    config::AlertsConfig,
    error::{AppError, AppResult},
    inspection::{self, EpiAlert},
    models::epi::{CreateEpi, Epi, EpiQuery, UpdateEpi},
    repository::EpiStore,
};

#[derive(Clone)]
pub struct EpisService {
    store: Arc<dyn EpiStore>,
    alerts: AlertsConfig,
}

impl EpisService {
    pub fn new(store: Arc<dyn EpiStore>, alerts: AlertsConfig) -> Self {
        Self { store, alerts }
    }

    pub async fn list(&self, query: &EpiQuery) -> AppResult<Vec<Epi>> {
        self.store.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Epi> {
        self.store.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEpi) -> AppResult<Epi> {
        let epi = self.store.create(data).await?;
        tracing::info!(id = epi.id, identifiant = %epi.identifiant_perso, "EPI created");
        Ok(epi)
    }

    pub async fn update(&self, id: i32, data: &UpdateEpi) -> AppResult<Epi> {
        self.store.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.store.delete(id).await?;
        tracing::info!(id, "EPI deleted");
        Ok(())
    }

    /// Equipment due for inspection within `days` (configured default when `None`)
    pub async fn alerts(&self, days: Option<i64>, by_urgency: bool) -> AppResult<Vec<EpiAlert>> {
        self.alerts_as_of(days, by_urgency, Local::now().date_naive()).await
    }

    pub async fn alerts_as_of(
        &self,
        days: Option<i64>,
        by_urgency: bool,
        today: NaiveDate,
    ) -> AppResult<Vec<EpiAlert>> {
        let threshold = days.unwrap_or(self.alerts.default_threshold_days);
        if !(0..=self.alerts.max_threshold_days).contains(&threshold) {
            return Err(AppError::Validation(format!(
                "days must be between 0 and {}",
                self.alerts.max_threshold_days
            )));
        }

        let epis = self.store.list(&EpiQuery::default()).await?;
        let total = epis.len();
        let mut alerts = inspection::build_alerts(epis, threshold, today);
        if by_urgency {
            inspection::sort_by_urgency(&mut alerts);
        }

        tracing::debug!(threshold, total, alerted = alerts.len(), "Computed inspection alerts");
        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        inspection::Severity,
        models::TypeEpiRef,
        repository::epis::MockEpiStore,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn epi(id: i32, dernier_controle: Option<NaiveDate>, periodicite: Option<i32>) -> Epi {
        Epi {
            id,
            identifiant_perso: format!("EPI-{id}"),
            marque: "Honeywell".to_string(),
            modele: "Miller".to_string(),
            date_mise_service: None,
            dernier_controle,
            periodicite_controle: periodicite,
            type_epi: None,
            crea_date: None,
            modif_date: None,
        }
    }

    fn fleet() -> Vec<Epi> {
        vec![
            // next 2024-01-31
            epi(1, Some(date(2024, 1, 1)), Some(30)),
            // next 2024-03-31
            epi(2, Some(date(2024, 1, 1)), Some(90)),
            epi(3, None, Some(30)),
            // inherits 10 days from its type, next 2024-01-11
            Epi {
                type_epi: Some(TypeEpiRef {
                    id: 1,
                    libelle: "Longe".to_string(),
                    periodicite_controle: Some(10),
                }),
                ..epi(4, Some(date(2024, 1, 1)), None)
            },
        ]
    }

    fn service(store: MockEpiStore) -> EpisService {
        EpisService::new(Arc::new(store), AlertsConfig::default())
    }

    #[tokio::test]
    async fn test_alerts_default_threshold() {
        let mut store = MockEpiStore::new();
        store.expect_list().times(1).returning(|_| Ok(fleet()));

        let alerts = service(store)
            .alerts_as_of(None, false, date(2024, 1, 20))
            .await
            .unwrap();

        let ids: Vec<i32> = alerts.iter().map(|a| a.epi.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(alerts[0].days_remaining, 11);
        assert_eq!(alerts[0].severity, Severity::Warning);
        assert_eq!(alerts[1].days_remaining, -9);
        assert_eq!(alerts[1].severity, Severity::Overdue);
    }

    #[tokio::test]
    async fn test_alerts_sorted_by_urgency() {
        let mut store = MockEpiStore::new();
        store.expect_list().returning(|_| Ok(fleet()));

        let alerts = service(store)
            .alerts_as_of(Some(90), true, date(2024, 1, 20))
            .await
            .unwrap();

        let ids: Vec<i32> = alerts.iter().map(|a| a.epi.id).collect();
        assert_eq!(ids, vec![4, 1, 2]);
    }

    #[tokio::test]
    async fn test_alerts_rejects_out_of_range_threshold() {
        let mut store = MockEpiStore::new();
        store.expect_list().never();
        let service = service(store);

        for days in [-1, 3651] {
            let err = service
                .alerts_as_of(Some(days), false, date(2024, 1, 20))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_alerts_propagates_store_error() {
        let mut store = MockEpiStore::new();
        store
            .expect_list()
            .returning(|_| Err(AppError::Internal("connection reset".to_string())));

        let err = service(store)
            .alerts_as_of(Some(30), false, date(2024, 1, 20))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_get_by_id_delegates() {
        let mut store = MockEpiStore::new();
        store
            .expect_get_by_id()
            .withf(|id| *id == 2)
            .returning(|id| Ok(epi(id, None, None)));

        assert_eq!(service(store).get_by_id(2).await.unwrap().id, 2);
    }
}
